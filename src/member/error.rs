use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("A required field is missing or blank. [field: {0}]")]
    MissingField(&'static str),
    #[error("No member matches the requested id. [id: {0}]")]
    NoSuchMember(u32),
}
