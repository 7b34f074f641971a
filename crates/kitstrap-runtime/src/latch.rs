//! Process-wide UI initialization latch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

static PROCESS_LATCH: Lazy<Arc<UiLatch>> = Lazy::new(|| Arc::new(UiLatch::new()));

/// One-way flag remembering that UI-toolkit initialization failed once in
/// this process.
///
/// A failed toolkit init can leave window-system connections and global
/// registries in a non-reentrant state, so once the flag is set every later
/// interpreter must fail its UI bootstrap without calling the toolkit
/// again. The flag never resets for the life of the process.
///
/// Acquire/release ordering keeps the latch safe when interpreters are
/// created from multiple threads: two instances can never both observe "not
/// yet failed" after one of them recorded the failure.
#[derive(Debug)]
pub struct UiLatch {
    failed: AtomicBool,
}

impl UiLatch {
    /// Fresh latch with no recorded failure.
    ///
    /// Tests and multi-tenant embedders inject their own instance; normal
    /// embedding uses [`UiLatch::process`].
    pub fn new() -> Self {
        Self {
            failed: AtomicBool::new(false),
        }
    }

    /// The latch shared by every interpreter in this process.
    pub fn process() -> Arc<UiLatch> {
        Arc::clone(&PROCESS_LATCH)
    }

    /// Record a failed toolkit initialization.
    pub fn note_failure(&self) {
        self.failed.store(true, Ordering::Release);
    }

    /// Whether any interpreter in this process already failed UI init.
    pub fn is_failed(&self) -> bool {
        self.failed.load(Ordering::Acquire)
    }
}

impl Default for UiLatch {
    fn default() -> Self {
        Self::new()
    }
}
