use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreenOpsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Irrigation system error: {0}")]
    Irrigation(String),

    #[error("Insufficient funds: need R{needed:.2}, balance is R{available:.2}")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, GreenOpsError>;
