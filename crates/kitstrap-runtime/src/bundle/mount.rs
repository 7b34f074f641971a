//! Mounting the executable image as a virtual filesystem.
//!
//! The mount point and the two bundled library directories are fixed at
//! build time; nothing is discovered by scanning the archive. The mount
//! itself lives in the driver's process-global state and is reused by
//! every later interpreter instance; the [`MountRecord`] only carries the
//! outcome of one attempt through the boot sequence.

use std::path::Path;

use kitstrap_sdk::{Interp, VfsDriver};

/// Logical root under which the appended archive is exposed.
pub const VFS_MOUNT_POINT: &str = "/kitvfs";

/// Bundled script-engine library tree inside the mount.
pub const SCRIPT_LIB_DIR: &str = "/kitvfs/scriptlib1.4";

/// Bundled UI-toolkit library tree inside the mount.
pub const UI_LIB_DIR: &str = "/kitvfs/uilib1.4";

/// Result of a single mount attempt.
///
/// An unmounted record carries neither library path; callers then fall
/// back to the engines' built-in library discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountRecord {
    mounted: bool,
}

impl MountRecord {
    /// Record for a failed or skipped mount.
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub(crate) fn mounted() -> Self {
        Self { mounted: true }
    }

    /// Whether the executable image is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The bundled script-engine library directory, if mounted.
    pub fn script_lib_dir(&self) -> Option<&'static str> {
        self.mounted.then_some(SCRIPT_LIB_DIR)
    }

    /// The bundled UI-toolkit library directory, if mounted.
    pub fn ui_lib_dir(&self) -> Option<&'static str> {
        self.mounted.then_some(UI_LIB_DIR)
    }
}

/// Mount the executable's own file as a read-only archive filesystem.
///
/// Initializes the driver and mounts `image` at [`VFS_MOUNT_POINT`]. Driver
/// failures are absorbed: the returned record is simply unmounted and the
/// engines keep their default library discovery. Safe even though `image`
/// is the running process image: drivers open it read-only for indexing,
/// distinct from the execution mapping.
pub fn mount_self(driver: &dyn VfsDriver, interp: &mut dyn Interp, image: &Path) -> MountRecord {
    if driver.init(interp).is_err() {
        return MountRecord::unmounted();
    }
    if driver.mount(interp, image, VFS_MOUNT_POINT).is_err() {
        return MountRecord::unmounted();
    }
    MountRecord::mounted()
}
