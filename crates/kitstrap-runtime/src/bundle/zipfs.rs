//! Default archive driver backed by the `zip` crate.
//!
//! Indexes the archive appended to the executable through the central
//! directory at the end of the file; entry data stays inside the image and
//! is inflated per read, never extracted to disk. Mounts live in a
//! process-global table shared by every interpreter instance: remounting
//! the same source at the same mount point is a no-op, and reads work from
//! any instance once the first mount succeeded.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use zip::ZipArchive;

use kitstrap_sdk::{InitResult, Interp, VfsDriver};

static MOUNT_TABLE: Lazy<Mutex<HashMap<String, MountedArchive>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// One mounted archive: the source file it was indexed from and the open
/// read-only index into it.
struct MountedArchive {
    source: PathBuf,
    archive: ZipArchive<File>,
}

/// Archive driver exposing ZIP contents under a mount point.
#[derive(Debug, Default)]
pub struct ZipVfsDriver;

impl ZipVfsDriver {
    /// Create the driver. All instances share the process-global mounts.
    pub fn new() -> Self {
        Self
    }

    /// Read an entry by its full virtual path (`<mount_point>/<entry>`).
    ///
    /// Returns `None` when the path is outside every mount or the entry is
    /// absent from the archive.
    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        let mut table = MOUNT_TABLE.lock();
        let (mount_point, entry_name) = resolve(&table, path)?;
        let mounted = table.get_mut(&mount_point)?;
        let mut entry = mounted.archive.by_name(&entry_name).ok()?;
        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data).ok()?;
        Some(data)
    }

    /// Read an entry as UTF-8 text.
    pub fn read_text(&self, path: &str) -> Option<String> {
        String::from_utf8(self.read(path)?).ok()
    }

    /// Check whether an entry exists under a mount.
    pub fn exists(&self, path: &str) -> bool {
        let table = MOUNT_TABLE.lock();
        let Some((mount_point, entry_name)) = resolve(&table, path) else {
            return false;
        };
        let Some(mounted) = table.get(&mount_point) else {
            return false;
        };
        let found = mounted.archive.file_names().any(|n| n == entry_name);
        found
    }
}

impl VfsDriver for ZipVfsDriver {
    fn init(&self, _interp: &mut dyn Interp) -> InitResult {
        // The mount table is created lazily; nothing per-interpreter.
        Ok(())
    }

    fn mount(&self, _interp: &mut dyn Interp, source: &Path, mount_point: &str) -> InitResult {
        let mut table = MOUNT_TABLE.lock();
        if let Some(existing) = table.get(mount_point) {
            if existing.source == source {
                return Ok(());
            }
            return Err(format!(
                "mount point {} already bound to {}",
                mount_point,
                existing.source.display()
            )
            .into());
        }

        let file =
            File::open(source).map_err(|e| format!("open {}: {}", source.display(), e))?;
        let archive =
            ZipArchive::new(file).map_err(|e| format!("index {}: {}", source.display(), e))?;

        table.insert(
            mount_point.to_string(),
            MountedArchive {
                source: source.to_path_buf(),
                archive,
            },
        );
        Ok(())
    }
}

/// Match a virtual path against the mount table.
///
/// Longest mount-point prefix wins; the remainder (without its leading
/// slash) is the archive entry name.
fn resolve(table: &HashMap<String, MountedArchive>, path: &str) -> Option<(String, String)> {
    let mut best: Option<(&str, &str)> = None;
    for mount_point in table.keys() {
        if let Some(entry_name) = strip_mount_prefix(path, mount_point) {
            if best.map_or(true, |(b, _)| mount_point.len() > b.len()) {
                best = Some((mount_point, entry_name));
            }
        }
    }
    best.map(|(m, e)| (m.to_string(), e.to_string()))
}

fn strip_mount_prefix<'a>(path: &'a str, mount_point: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(mount_point)?;
    let entry = rest.strip_prefix('/')?;
    if entry.is_empty() {
        return None;
    }
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::detect;
    use crate::testutil::FakeInterp;
    use std::io::{Cursor, Write};

    /// Build a self-image file: executable-looking bytes with a ZIP
    /// archive appended, the way a kitstrap binary is assembled.
    fn make_self_image(entries: &[(&str, &str)]) -> tempfile::NamedTempFile {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        for (name, data) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data.as_bytes()).unwrap();
        }
        let zip_bytes = writer.finish().unwrap().into_inner();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x7fELF\x02\x01\x01 kitstrap image bytes").unwrap();
        file.write_all(&zip_bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn appended_archive_carries_the_trailing_signature() {
        let image = make_self_image(&[("scriptlib1.4/init.scr", "bootstrap")]);
        assert!(detect(image.path()));
    }

    #[test]
    fn mounts_and_reads_without_extraction() {
        let image = make_self_image(&[
            ("scriptlib1.4/init.scr", "source init.scr"),
            ("uilib1.4/ui.scr", "source ui.scr"),
        ]);
        let driver = ZipVfsDriver::new();
        let mut interp = FakeInterp::default();

        driver.init(&mut interp).unwrap();
        driver.mount(&mut interp, image.path(), "/zt-read").unwrap();

        assert!(driver.exists("/zt-read/scriptlib1.4/init.scr"));
        assert_eq!(
            driver.read_text("/zt-read/scriptlib1.4/init.scr").as_deref(),
            Some("source init.scr")
        );
        assert_eq!(
            driver.read_text("/zt-read/uilib1.4/ui.scr").as_deref(),
            Some("source ui.scr")
        );
    }

    #[test]
    fn missing_entries_and_foreign_paths_miss() {
        let image = make_self_image(&[("scriptlib1.4/init.scr", "x")]);
        let driver = ZipVfsDriver::new();
        let mut interp = FakeInterp::default();
        driver.mount(&mut interp, image.path(), "/zt-miss").unwrap();

        assert!(!driver.exists("/zt-miss/scriptlib1.4/absent.scr"));
        assert!(driver.read("/zt-miss/scriptlib1.4/absent.scr").is_none());
        assert!(driver.read("/unmounted/init.scr").is_none());
        assert!(driver.read("/zt-miss").is_none());
    }

    #[test]
    fn remounting_the_same_source_is_idempotent() {
        let image = make_self_image(&[("scriptlib1.4/init.scr", "x")]);
        let driver = ZipVfsDriver::new();
        let mut interp = FakeInterp::default();

        driver.mount(&mut interp, image.path(), "/zt-idem").unwrap();
        driver.mount(&mut interp, image.path(), "/zt-idem").unwrap();
        assert!(driver.exists("/zt-idem/scriptlib1.4/init.scr"));
    }

    #[test]
    fn conflicting_source_at_the_same_mount_point_errors() {
        let first = make_self_image(&[("a", "1")]);
        let second = make_self_image(&[("b", "2")]);
        let driver = ZipVfsDriver::new();
        let mut interp = FakeInterp::default();

        driver.mount(&mut interp, first.path(), "/zt-conflict").unwrap();
        assert!(driver
            .mount(&mut interp, second.path(), "/zt-conflict")
            .is_err());
    }

    #[test]
    fn file_without_archive_fails_to_mount() {
        let mut plain = tempfile::NamedTempFile::new().unwrap();
        plain.write_all(b"no archive here").unwrap();
        plain.flush().unwrap();

        let driver = ZipVfsDriver::new();
        let mut interp = FakeInterp::default();
        assert!(driver.mount(&mut interp, plain.path(), "/zt-plain").is_err());
    }
}
