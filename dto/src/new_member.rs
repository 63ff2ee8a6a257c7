use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload used to add a member to a family.
/// `last_name` may be left out, in which case the family surname applies.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct NewMemberDto {
    first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    age: u8,
    lucky_numbers: Vec<u32>,
}

impl NewMemberDto {
    pub fn new(
        first_name: String,
        last_name: Option<String>,
        age: u8,
        lucky_numbers: Vec<u32>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            age,
            lucky_numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::new_member::NewMemberDto;
    use parameterized::parameterized;

    #[test]
    fn should_deserialize_without_last_name() {
        let json = r#"{"first_name":"Anna","age":20,"lucky_numbers":[]}"#;

        let new_member: NewMemberDto = serde_json::from_str(json).unwrap();

        assert_eq!("Anna", new_member.first_name());
        assert_eq!(&None, new_member.last_name());
        assert_eq!(&20, new_member.age());
        assert_eq!(&Vec::<u32>::new(), new_member.lucky_numbers());
    }

    #[parameterized(
        json = {
            r#"{"age":20,"lucky_numbers":[]}"#,
            r#"{"first_name":"Anna","lucky_numbers":[]}"#,
            r#"{"first_name":"Anna","age":20}"#,
            r#"{"first_name":"Anna","age":"20","lucky_numbers":[]}"#
        }
    )]
    fn should_fail_to_deserialize_when_field_is_missing_or_malformed(json: &str) {
        assert!(serde_json::from_str::<NewMemberDto>(json).is_err());
    }
}
