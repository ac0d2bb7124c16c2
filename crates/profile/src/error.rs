use thiserror::Error;

/// Errors that can occur while extracting profile signals.
///
/// These never escape [`extract_signals`](crate::extract_signals); they are
/// logged and the caller receives empty signals instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("profile text is empty")]
    EmptyInput,
}
