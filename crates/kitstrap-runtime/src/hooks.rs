//! Platform-variant hooks around the boot sequence.
//!
//! Platform differences (resource-bundle library lookup on one OS, extra
//! window-system registrations) are a capability object selected at
//! build/config time and invoked at fixed points of the sequence, instead
//! of conditional-compilation branches inlined into it.

use kitstrap_sdk::Interp;

use crate::paths::{SCRIPT_LIBRARY_VAR, UI_LIBRARY_VAR};

/// Platform behavior invoked at fixed points of the boot sequence.
///
/// Every call is best-effort: a hook must not fail the sequence.
pub trait PlatformHook: Send + Sync {
    /// Runs before archive detection and engine init.
    ///
    /// The bundle-resolver variant seeds default library globals here; a
    /// successful mount overrides them afterwards.
    fn pre_engine_init(&self, _interp: &mut dyn Interp) {}

    /// Runs after the latch check, before toolkit init.
    fn pre_ui_init(&self, _interp: &mut dyn Interp) {}

    /// Runs after a fully successful UI init (window registration, platform
    /// menus).
    fn post_ui_init(&self, _interp: &mut dyn Interp) {}
}

/// Hook for platforms with no special boot requirements.
#[derive(Debug, Default)]
pub struct NoopHook;

impl PlatformHook for NoopHook {}

/// Resolves a platform resource-bundle identifier to a library directory.
///
/// The lookup itself is an external facility supplied by the embedding
/// application; `None` means the bundle does not carry that library.
pub type BundleResolver = fn(bundle_id: &str) -> Option<String>;

/// Hook for platforms that ship the engine libraries inside an application
/// resource bundle.
///
/// Seeds each engine's library global from the bundle right before that
/// engine would otherwise fall back to built-in discovery. A mounted
/// archive still wins for the script engine: the mount's path write happens
/// after `pre_engine_init`.
pub struct BundleLibraryHook {
    script_bundle_id: String,
    ui_bundle_id: String,
    resolver: BundleResolver,
}

impl BundleLibraryHook {
    /// Create a hook resolving the two engine bundles through `resolver`.
    pub fn new(script_bundle_id: &str, ui_bundle_id: &str, resolver: BundleResolver) -> Self {
        Self {
            script_bundle_id: script_bundle_id.to_string(),
            ui_bundle_id: ui_bundle_id.to_string(),
            resolver,
        }
    }
}

impl PlatformHook for BundleLibraryHook {
    fn pre_engine_init(&self, interp: &mut dyn Interp) {
        if let Some(dir) = (self.resolver)(&self.script_bundle_id) {
            interp.set_global(SCRIPT_LIBRARY_VAR, &dir);
        }
    }

    fn pre_ui_init(&self, interp: &mut dyn Interp) {
        if let Some(dir) = (self.resolver)(&self.ui_bundle_id) {
            interp.set_global(UI_LIBRARY_VAR, &dir);
        }
    }
}
