use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to parse preferences JSON: {0}")]
    Parse(String),

    #[error("failed to serialize preferences: {0}")]
    Serialize(String),

    #[error("preference '{name}' out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}
