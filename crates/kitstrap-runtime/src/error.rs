//! Boot error types.

/// Stable diagnostic for a failed UI-toolkit initialization, used
/// identically for the first failing attempt and every latched replay.
pub const UI_INIT_ERRMSG: &str =
    "ui toolkit initialization failed and cannot be retried in this process";

/// Terminal result of a failed bootstrap.
///
/// Archive detection and mount failures never surface here; they degrade
/// silently to the engines' built-in library discovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    /// The scripting engine's standard-library initializer failed; its own
    /// message is passed through verbatim. Retriable with a fresh
    /// interpreter instance.
    #[error("{0}")]
    ScriptInit(String),

    /// UI-toolkit initialization failed, now or earlier in this process.
    /// Permanent for the life of the process once latched.
    #[error("{}", UI_INIT_ERRMSG)]
    UiInit,
}
