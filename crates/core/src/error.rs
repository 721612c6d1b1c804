use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("unknown choice order: {0}")]
    UnknownOrder(String),
}
