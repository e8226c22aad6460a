//! Customization-aware merge-copy engine
//!
//! This module decides, for each file to install, whether to create it,
//! update it in place, overwrite it, or leave it alone and write the new
//! template content to a `.new` sibling for manual review.
//!
//! A target is never silently replaced once the user has edited it: without
//! `force_update`, a customized target keeps its exact bytes.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::digest_store::DigestStore;
use crate::error::{Result, SkillpackError};
use crate::hash;

/// Action taken for a single target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Target did not exist and was created
    Created,
    /// Target existed, was not customized, and was updated in place
    Updated,
    /// Target existed and was replaced because force-update was requested
    Overwritten,
    /// Target was customized; the new content was written to a `.new` sibling
    Skipped { new_path: PathBuf },
}

impl MergeAction {
    /// True for `Updated` and `Overwritten`
    pub fn is_update(&self) -> bool {
        matches!(self, MergeAction::Updated | MergeAction::Overwritten)
    }
}

impl fmt::Display for MergeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeAction::Created => write!(f, "created"),
            MergeAction::Updated => write!(f, "updated"),
            MergeAction::Overwritten => write!(f, "updated (overwritten)"),
            MergeAction::Skipped { new_path } => {
                let name = new_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| new_path.display().to_string());
                write!(f, "skipped (customized, new version at {})", name)
            }
        }
    }
}

/// Check whether a previously installed target was edited by the user
///
/// Absent targets are never customized. When the store has no record for
/// the target (installed before digest tracking, or the record was lost),
/// falls back to comparing the target against the source template.
pub fn is_customized(source: &Path, target: &Path, store: &DigestStore) -> Result<bool> {
    if !target.exists() {
        return Ok(false);
    }

    let current = hash::hash_file_or_empty(target)?;

    match store.get(target)? {
        Some(recorded) => Ok(current != recorded),
        None => Ok(current != hash::hash_file_or_empty(source)?),
    }
}

/// Copy `source` to `target`, preserving user customizations
///
/// Decision order: absent target is created; `force_update` overwrites
/// unconditionally; a customized target is left untouched with the source
/// copied to a `.new` sibling; otherwise the target is updated in place.
///
/// `dry_run` computes the same action without touching the filesystem or
/// the digest store.
pub fn copy_with_merge(
    source: &Path,
    target: &Path,
    store: &DigestStore,
    dry_run: bool,
    force_update: bool,
) -> Result<MergeAction> {
    if !target.exists() {
        if !dry_run {
            copy_file(source, target)?;
            store.record(target)?;
        }
        return Ok(MergeAction::Created);
    }

    if force_update {
        if !dry_run {
            copy_file(source, target)?;
            store.record(target)?;
        }
        return Ok(MergeAction::Overwritten);
    }

    if is_customized(source, target, store)? {
        let new_path = new_sibling_path(target);
        if !dry_run {
            copy_file(source, &new_path)?;
        }
        return Ok(MergeAction::Skipped { new_path });
    }

    if !dry_run {
        copy_file(source, target)?;
        store.record(target)?;
    }
    Ok(MergeAction::Updated)
}

/// Same decision table as [`copy_with_merge`], but the bytes written are
/// `content` rather than a copy of `source`
///
/// Used for agent files, whose installed form is the adapter output.
/// Customization detection still keys off the source template.
pub fn install_content(
    source: &Path,
    target: &Path,
    content: &str,
    store: &DigestStore,
    dry_run: bool,
    force_update: bool,
) -> Result<MergeAction> {
    if !target.exists() {
        if !dry_run {
            write_file(target, content)?;
            store.record(target)?;
        }
        return Ok(MergeAction::Created);
    }

    if force_update {
        if !dry_run {
            write_file(target, content)?;
            store.record(target)?;
        }
        return Ok(MergeAction::Overwritten);
    }

    if is_customized(source, target, store)? {
        let new_path = new_sibling_path(target);
        if !dry_run {
            write_file(&new_path, content)?;
        }
        return Ok(MergeAction::Skipped { new_path });
    }

    if !dry_run {
        write_file(target, content)?;
        store.record(target)?;
    }
    Ok(MergeAction::Updated)
}

/// Ensure the parent directory of a path exists
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SkillpackError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Sibling path with `.new` appended to the file name
fn new_sibling_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".new");
    target.with_file_name(name)
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    fs::copy(source, target).map_err(|e| SkillpackError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn write_file(target: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(target)?;
    fs::write(target, content).map_err(|e| SkillpackError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
