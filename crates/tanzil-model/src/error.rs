use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    #[error("invalid ayah index '{value}': expected a positive integer")]
    InvalidAyahIndex { value: String },
}
