//! Collaborator service traits driven by the boot sequence

use std::path::Path;

use crate::error::InitResult;
use crate::interp::Interp;

/// Archive filesystem driver.
///
/// Exposes the contents of an archive container as a navigable path
/// hierarchy without extracting it to disk. The source file may be the
/// running process image; drivers must open it read-only for indexing,
/// distinct from the execution mapping. Mounting the same source at the
/// same mount point repeatedly must be idempotent.
pub trait VfsDriver: Send + Sync {
    /// Initialize the driver for this interpreter. Safe to call more than
    /// once per process.
    fn init(&self, interp: &mut dyn Interp) -> InitResult;

    /// Expose the archive in `source` under `mount_point`.
    fn mount(&self, interp: &mut dyn Interp, source: &Path, mount_point: &str) -> InitResult;
}

/// The embedded scripting engine.
pub trait ScriptEngine: Send + Sync {
    /// Initialize the engine's standard library on this interpreter.
    ///
    /// Reads the script library variables exactly once at the start of its
    /// own bootstrap, so they must be in place before this call.
    fn init_stdlib(&self, interp: &mut dyn Interp) -> InitResult;
}

/// The UI toolkit layered on the scripting engine.
///
/// A failed [`init_toolkit`](UiToolkit::init_toolkit) can leave
/// window-system connections and global registries in a non-reentrant
/// state; the boot sequence never calls it again in the same process after
/// one failure.
pub trait UiToolkit: Send + Sync {
    /// Initialize the toolkit on this interpreter.
    fn init_toolkit(&self, interp: &mut dyn Interp) -> InitResult;

    /// Acquire the toolkit's main window for this interpreter.
    fn main_window(&self, interp: &mut dyn Interp);
}

/// An optional bundled sub-toolkit.
///
/// Registered best-effort after a successful UI init; a failing extension
/// never fails the boot sequence.
pub trait StaticExtension: Send + Sync {
    /// Extension name, for the embedding application's bookkeeping.
    fn name(&self) -> &str;

    /// Register the extension on this interpreter.
    fn register(&self, interp: &mut dyn Interp) -> InitResult;
}
