use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Partial update of a member: a field left out keeps its current value.
#[derive(Debug, Default, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct MemberUpdateDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lucky_numbers: Option<Vec<u32>>,
}

impl MemberUpdateDto {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        age: Option<u8>,
        lucky_numbers: Option<Vec<u32>>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            age,
            lucky_numbers,
        }
    }
}
