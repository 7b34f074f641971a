//! Kitstrap runtime
//!
//! Boot-time core of a self-contained kitstrap executable. At startup the
//! binary discovers whether a ZIP archive has been appended to its own
//! image, mounts that archive as a virtual filesystem, redirects the
//! embedded scripting engine's and UI toolkit's library-search variables
//! into the mount, and drives the ordered initialization of both engines.
//! All of this happens before the engines' own standard initialization
//! runs, and the archive is never unpacked to disk.
//!
//! Entry point is [`Bootstrap`], run once per interpreter instance. The
//! engines, the archive driver, and the platform hooks are collaborator
//! traits from `kitstrap-sdk`; a default ZIP-backed driver is provided in
//! [`bundle::ZipVfsDriver`].

pub mod boot;
pub mod bundle;
pub mod error;
pub mod hooks;
pub mod latch;
pub mod paths;

#[cfg(test)]
pub(crate) mod testutil;

pub use boot::{BootOutcome, Bootstrap, SKIP_UI_INIT_VAR, UI_FAILED_VAR};
pub use error::{BootError, UI_INIT_ERRMSG};
pub use latch::UiLatch;
