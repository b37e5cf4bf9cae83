//! Shared error types for the insight scoring service

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Invalid bind address: {address}")]
    InvalidAddress { address: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
