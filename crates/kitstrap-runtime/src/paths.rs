//! Library-search redirection for the bundled engines.
//!
//! When the executable's archive is mounted, each engine's library tree
//! lives at a fixed path inside the mount. Both an environment variable and
//! an interpreter-global variable are written per engine, because different
//! subsystems consult different one of the two. The writes must land
//! strictly before the corresponding engine initializer runs: the
//! initializer reads these variables exactly once at the start of its own
//! bootstrap script, and there is no synchronization primitive beyond
//! sequencing.

use kitstrap_sdk::Interp;

use crate::bundle::MountRecord;

/// Environment variable consulted by the script engine's stdlib bootstrap.
pub const SCRIPT_LIBRARY_ENV: &str = "KITSTRAP_SCRIPT_LIBRARY";

/// Interpreter global consulted by the script engine's stdlib bootstrap.
pub const SCRIPT_LIBRARY_VAR: &str = "script_library";

/// Environment variable consulted by the UI toolkit's bootstrap.
pub const UI_LIBRARY_ENV: &str = "KITSTRAP_UI_LIBRARY";

/// Interpreter global consulted by the UI toolkit's bootstrap.
pub const UI_LIBRARY_VAR: &str = "ui_library";

/// Point the script engine's library search into the mounted archive.
///
/// No-op when the image was not mounted; the engine then keeps its built-in
/// discovery logic.
pub fn apply_script_paths(interp: &mut dyn Interp, record: &MountRecord) {
    if let Some(dir) = record.script_lib_dir() {
        interp.set_env_var(SCRIPT_LIBRARY_ENV, dir);
        interp.set_global(SCRIPT_LIBRARY_VAR, dir);
    }
}

/// Point the UI toolkit's library search into the mounted archive.
///
/// No-op when the image was not mounted.
pub fn apply_ui_paths(interp: &mut dyn Interp, record: &MountRecord) {
    if let Some(dir) = record.ui_lib_dir() {
        interp.set_env_var(UI_LIBRARY_ENV, dir);
        interp.set_global(UI_LIBRARY_VAR, dir);
    }
}
