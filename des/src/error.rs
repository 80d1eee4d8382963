//! Error types for the DES engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesError {
    #[error("Invalid DES key length: {0} bytes (expected 8)")]
    InvalidKeyLength(usize),
}

pub type Result<T> = std::result::Result<T, DesError>;
