use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketError {
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error("invalid ticket prefix '{0}': must be uppercase alphanumeric with inner hyphens")]
    InvalidPrefix(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TicketError>;
