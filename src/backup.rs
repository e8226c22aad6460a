//! Backup of an existing installation before a forced update

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SkillpackError};
use crate::merge::ensure_parent_dir;
use crate::platform::Platform;

/// Directory under the target that collects timestamped backups
pub const BACKUP_DIR_NAME: &str = ".skillpack-backup";

/// Copy the platform config root into a timestamped backup directory
///
/// Returns the backup path, or `None` when there is nothing to back up.
pub fn backup_existing(target_dir: &Path, platform: Platform) -> Result<Option<PathBuf>> {
    let config_root = platform.config_root(target_dir);
    if !config_root.exists() {
        return Ok(None);
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    let backup_root = target_dir.join(BACKUP_DIR_NAME).join(timestamp);
    let dest_root = backup_root.join(platform.config_dir());

    for entry in WalkDir::new(&config_root) {
        let entry = entry.map_err(|e| SkillpackError::IoError {
            message: e.to_string(),
        })?;

        let rel = entry
            .path()
            .strip_prefix(&config_root)
            .unwrap_or(entry.path());
        let dest = dest_root.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| SkillpackError::FileWriteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        ensure_parent_dir(&dest)?;
        fs::copy(entry.path(), &dest).map_err(|e| SkillpackError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    Ok(Some(backup_root))
}
