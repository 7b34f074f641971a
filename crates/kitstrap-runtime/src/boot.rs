//! Ordered engine bootstrap for one interpreter instance.
//!
//! The sequence per interpreter, in fixed order:
//!
//! 1. platform pre-init hook
//! 2. detect the self-archive and mount it (failures fall back silently to
//!    built-in library discovery)
//! 3. redirect the script engine's library paths into the mount
//! 4. initialize the scripting engine's standard library
//! 5. honor the embedder's skip flag (headless use ends here, successfully)
//! 6. consult the process-wide UI latch and the per-interpreter failure flag
//! 7. redirect the UI toolkit's library paths, initialize the toolkit,
//!    acquire its main window
//! 8. best-effort post-init: platform hook, bundled static extensions
//!
//! Everything runs synchronously on the calling thread; the only state
//! shared across interpreter instances is the [`UiLatch`] and the driver's
//! mount table.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use kitstrap_sdk::{Interp, ScriptEngine, StaticExtension, UiToolkit, VfsDriver};

use crate::bundle::{self, MountRecord};
use crate::error::{BootError, UI_INIT_ERRMSG};
use crate::hooks::{NoopHook, PlatformHook};
use crate::latch::UiLatch;
use crate::paths;

/// Interpreter global the embedding application sets to the literal `"1"`
/// to keep the sequence headless: the scripting engine comes up, UI init
/// never runs, and no latch state is touched.
pub const SKIP_UI_INIT_VAR: &str = "kitstrap_skip_ui_init";

/// Interpreter global recording a failed UI init on this interpreter, for
/// the embedding application to introspect.
pub const UI_FAILED_VAR: &str = "kitstrap_ui_failed";

/// How a successful bootstrap ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootOutcome {
    /// Scripting engine and UI toolkit are both initialized.
    Full,
    /// The embedding application requested a headless interpreter; the
    /// sequence ended successfully before any UI state was touched.
    UiSkipped,
}

/// Drives the boot sequence for interpreter instances.
///
/// One `Bootstrap` serves any number of interpreters. Collaborators are
/// shared service objects; the UI latch defaults to the process-wide
/// instance and can be substituted for tests or multi-tenant embedders.
pub struct Bootstrap {
    vfs: Arc<dyn VfsDriver>,
    engine: Arc<dyn ScriptEngine>,
    toolkit: Arc<dyn UiToolkit>,
    latch: Arc<UiLatch>,
    hook: Box<dyn PlatformHook>,
    extensions: Vec<Box<dyn StaticExtension>>,
    image_override: Option<PathBuf>,
}

impl Bootstrap {
    /// Wire the three collaborator services with the process latch and the
    /// no-op platform hook.
    pub fn new(
        vfs: Arc<dyn VfsDriver>,
        engine: Arc<dyn ScriptEngine>,
        toolkit: Arc<dyn UiToolkit>,
    ) -> Self {
        Self {
            vfs,
            engine,
            toolkit,
            latch: UiLatch::process(),
            hook: Box::new(NoopHook),
            extensions: Vec::new(),
            image_override: None,
        }
    }

    /// Substitute the UI latch (tests, multi-tenant embedders).
    pub fn with_latch(mut self, latch: Arc<UiLatch>) -> Self {
        self.latch = latch;
        self
    }

    /// Select a platform hook variant.
    pub fn with_hook(mut self, hook: Box<dyn PlatformHook>) -> Self {
        self.hook = hook;
        self
    }

    /// Register an optional bundled extension, initialized best-effort
    /// after a successful UI init.
    pub fn with_extension(mut self, extension: Box<dyn StaticExtension>) -> Self {
        self.extensions.push(extension);
        self
    }

    /// Inspect the given file instead of the running executable.
    pub fn with_image(mut self, image: PathBuf) -> Self {
        self.image_override = Some(image);
        self
    }

    /// Run the full sequence on one interpreter.
    ///
    /// Fails fast on a scripting-engine error (retriable with a fresh
    /// interpreter) or a UI failure (permanent for this process once
    /// latched). Initialization is all-or-nothing from the caller's point
    /// of view, except for the explicit, successful skip path.
    pub fn run(&self, interp: &mut dyn Interp) -> Result<BootOutcome, BootError> {
        self.hook.pre_engine_init(interp);

        let record = self.mount_self_image(interp);
        paths::apply_script_paths(interp, &record);

        self.engine
            .init_stdlib(interp)
            .map_err(|e| BootError::ScriptInit(e.to_string()))?;

        if interp.global(SKIP_UI_INIT_VAR).as_deref() == Some("1") {
            return Ok(BootOutcome::UiSkipped);
        }

        if self.latch.is_failed() || interp.global(UI_FAILED_VAR).as_deref() == Some("1") {
            interp.set_result(UI_INIT_ERRMSG);
            return Err(BootError::UiInit);
        }

        self.hook.pre_ui_init(interp);
        paths::apply_ui_paths(interp, &record);

        if self.toolkit.init_toolkit(interp).is_err() {
            self.latch.note_failure();
            interp.set_global(UI_FAILED_VAR, "1");
            interp.set_result(UI_INIT_ERRMSG);
            return Err(BootError::UiInit);
        }

        self.toolkit.main_window(interp);

        self.hook.post_ui_init(interp);
        for extension in &self.extensions {
            // Optional sub-toolkits register best-effort; a failing one
            // never fails the boot.
            let _ = extension.register(interp);
        }

        Ok(BootOutcome::Full)
    }

    /// Detect and mount the archive appended to the executable image.
    ///
    /// Resolution, detection, and mount failures all leave the record
    /// unmounted; the engines then use their built-in library discovery.
    fn mount_self_image(&self, interp: &mut dyn Interp) -> MountRecord {
        let image = match &self.image_override {
            Some(path) => path.clone(),
            None => match env::current_exe() {
                Ok(path) => path,
                Err(_) => return MountRecord::unmounted(),
            },
        };
        if !bundle::detect(&image) {
            return MountRecord::unmounted();
        }
        bundle::mount_self(self.vfs.as_ref(), interp, &image)
    }
}
