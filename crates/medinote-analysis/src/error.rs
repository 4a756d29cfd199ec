use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The caller passed something other than text or null. This is a
    /// caller bug, so it is reported rather than coerced.
    #[error("note text must be a string or null, got {found}")]
    InvalidInput { found: &'static str },
}
