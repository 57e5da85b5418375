use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimestampError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("Unparseable timestamp: {0:?}")]
    Unparseable(String),
}
