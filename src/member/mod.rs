use crate::member::error::Error;
use derive_getters::Getters;
use dto::member::MemberDto;

pub mod error;
pub mod store;

type Result<T, E = Error> = std::result::Result<T, E>;

/// A single member of a family.
/// The id is assigned by the store and never changes afterwards.
#[derive(Debug, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    id: u32,
    first_name: String,
    last_name: String,
    age: u8,
    lucky_numbers: Vec<u32>,
}

impl Member {
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

impl From<&Member> for MemberDto {
    fn from(member: &Member) -> Self {
        MemberDto::new(
            member.id,
            member.first_name.clone(),
            member.last_name.clone(),
            member.age,
            member.lucky_numbers.clone(),
        )
    }
}
