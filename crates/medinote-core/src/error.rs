use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("severity {0} is outside range [1, 10]")]
    SeverityOutOfRange(i64),

    #[error("unknown entity category: {0}")]
    UnknownCategory(String),
}
