use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid pet id letter: {0:?}")]
    InvalidIdLetter(char),
    #[error("pet id number out of range: {0}")]
    IdNumberOutOfRange(u32),
}
