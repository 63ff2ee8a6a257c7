use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A member as exposed over the wire.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct MemberDto {
    id: u32,
    first_name: String,
    last_name: String,
    age: u8,
    lucky_numbers: Vec<u32>,
}

impl MemberDto {
    pub fn new(
        id: u32,
        first_name: String,
        last_name: String,
        age: u8,
        lucky_numbers: Vec<u32>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            age,
            lucky_numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::member::MemberDto;

    #[test]
    fn should_serialize_with_wire_field_names() {
        let member = MemberDto::new(1, "John".to_owned(), "Jackson".to_owned(), 33, vec![7, 13]);

        let json = serde_json::to_value(&member).unwrap();

        assert_eq!(
            serde_json::json!({
                "id": 1,
                "first_name": "John",
                "last_name": "Jackson",
                "age": 33,
                "lucky_numbers": [7, 13]
            }),
            json
        );
    }
}
