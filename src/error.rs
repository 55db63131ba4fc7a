use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayrollError>;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("input stream closed while a prompt was waiting for an answer")]
    InputClosed,
}
