use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    /// The source text is not syntactically valid JSX/TSX. Carries the
    /// parser's diagnostic message verbatim. Deterministic: the same input
    /// always fails the same way, so this is never retried.
    #[error("Parse error: {message}")]
    Parse { message: String },
}
