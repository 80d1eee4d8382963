//! Error type shared by the facade and the command-line tool

use aes::AesError;
use cipher_modes::CipherModeError;
use des::DesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptokitError {
    #[error(transparent)]
    Mode(#[from] CipherModeError),

    #[error(transparent)]
    Aes(#[from] AesError),

    #[error(transparent)]
    Des(#[from] DesError),

    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CryptokitError>;
