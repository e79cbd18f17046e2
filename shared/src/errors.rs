//! Shared error types for the vendor directory

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Vendor dataset could not be parsed: {message}")]
    DatasetParse { message: String },

    #[error("Vendor dataset could not be read from {path}: {message}")]
    DatasetRead { path: String, message: String },

    #[error("Duplicate vendor id in dataset: {id}")]
    DuplicateVendorId { id: String },

    #[error("Vendor source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("Invalid command: {input}")]
    InvalidCommand { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
