use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("cursor index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
    #[error("no current element to operate on")]
    InvalidState,
    #[error("operation not supported: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
