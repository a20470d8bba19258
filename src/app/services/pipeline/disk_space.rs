//! Free-space checks before writing large files

use std::path::Path;
use sysinfo::Disks;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Free bytes on the file system holding `path`
///
/// Picks the disk with the longest mount point containing the path. Returns
/// `None` when the path cannot be resolved or no disk matches.
pub fn available_space(path: &Path) -> Option<u64> {
    let path = path.canonicalize().ok()?;
    let disks = Disks::new_with_refreshed_list();

    disks
        .list()
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len())
        .map(|disk| disk.available_space())
}

/// Fail with [`Error::InsufficientDiskSpace`] when `path` has less than `required` bytes free
///
/// When the free space cannot be determined the check passes with a warning.
pub fn ensure_free_space(path: &Path, required: u64) -> Result<()> {
    match available_space(path) {
        Some(available) if available < required => Err(Error::insufficient_disk_space(
            path.display().to_string(),
            required,
            available,
        )),
        Some(available) => {
            debug!(
                "{} bytes required, {} bytes available at {}",
                required,
                available,
                path.display()
            );
            Ok(())
        }
        None => {
            warn!(
                "Could not determine free disk space at {}, skipping check",
                path.display()
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nothing_required_always_fits() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ensure_free_space(temp_dir.path(), 0).is_ok());
    }

    #[test]
    fn test_impossible_requirement_fails_when_space_is_known() {
        let temp_dir = TempDir::new().unwrap();

        match ensure_free_space(temp_dir.path(), u64::MAX) {
            Err(Error::InsufficientDiskSpace {
                required,
                available,
                ..
            }) => {
                assert_eq!(required, u64::MAX);
                assert!(available < required);
            }
            Ok(()) => assert_eq!(available_space(temp_dir.path()), None),
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_path_has_no_known_space() {
        assert_eq!(available_space(Path::new("/definitely/not/a/real/path")), None);
        assert!(ensure_free_space(Path::new("/definitely/not/a/real/path"), u64::MAX).is_ok());
    }
}
