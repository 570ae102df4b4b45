use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field name: {0}")]
    UnknownField(String),
    #[error("unknown review section: {0}")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
