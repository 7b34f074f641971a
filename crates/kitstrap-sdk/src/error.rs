//! Error types for collaborator initialization calls

/// Result type for collaborator initialization calls.
pub type InitResult = Result<(), InitError>;

/// Failure reported by an external collaborator (engine, toolkit, driver,
/// extension) during initialization.
///
/// The message is the collaborator's own diagnostic; the boot sequence
/// decides per step whether it is propagated verbatim, replaced by a stable
/// diagnostic, or absorbed.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct InitError(pub String);

impl From<String> for InitError {
    fn from(s: String) -> Self {
        InitError(s)
    }
}

impl From<&str> for InitError {
    fn from(s: &str) -> Self {
        InitError(s.to_string())
    }
}
