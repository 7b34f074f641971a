//! Self-archive handling
//!
//! A kitstrap executable may carry a ZIP archive appended to its own binary
//! image:
//!
//! ```text
//! ┌─────────────────────────────┐
//! │  executable (unchanged)     │  ← normal binary, runs as-is
//! ├─────────────────────────────┤
//! │  archive entries            │  ← library scripts, assets
//! ├─────────────────────────────┤
//! │  central directory + EOCD   │  ← signature sits 22 bytes from EOF
//! └─────────────────────────────┘
//! ```
//!
//! [`detect`] sniffs the trailing signature, [`mount_self`] exposes the
//! archive under a fixed mount point through a [`VfsDriver`], and
//! [`ZipVfsDriver`] is the bundled driver implementation.
//!
//! [`VfsDriver`]: kitstrap_sdk::VfsDriver

mod detect;
mod mount;
mod zipfs;

pub use detect::{detect, has_trailing_signature, ARCHIVE_SIGNATURE, EOCD_TAIL_LEN};
pub use mount::{mount_self, MountRecord, SCRIPT_LIB_DIR, UI_LIB_DIR, VFS_MOUNT_POINT};
pub use zipfs::ZipVfsDriver;
