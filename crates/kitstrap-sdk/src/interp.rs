//! Interpreter handle trait

/// Handle to one interpreter instance of the embedded scripting engine.
///
/// The boot sequence uses it for three things: interpreter-global variables
/// (library paths, the skip/failure flags), the interpreter's view of the
/// process environment, and the result slot where a stable diagnostic is
/// left on failure.
///
/// Implementations front the real engine's variable table. The environment
/// writes are expected to reach both the interpreter's own `env` view and
/// the process environment, since different subsystems consult different
/// one of the two.
pub trait Interp {
    /// Read an interpreter-global variable.
    fn global(&self, name: &str) -> Option<String>;

    /// Write an interpreter-global variable.
    fn set_global(&mut self, name: &str, value: &str);

    /// Read a variable from the interpreter's environment view.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Write a variable into the interpreter's environment view (and the
    /// process environment behind it).
    fn set_env_var(&mut self, name: &str, value: &str);

    /// Replace the interpreter result with a diagnostic message.
    fn set_result(&mut self, message: &str);
}
