//! Persistent digest records for installed files
//!
//! A flat JSON document under the platform config root maps each installed
//! target path to the content digest recorded at the moment the tool last
//! wrote that file. A target whose current digest no longer matches its
//! record is considered customized by the user.
//!
//! Every write is a full read-modify-write of the document. The store is
//! single-process; concurrent runs against the same target may race and
//! are unsupported.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkillpackError};
use crate::hash;

/// File name of the digest store under the platform config root
pub const STORE_FILE_NAME: &str = ".installed-hashes.json";

/// Digest store rooted in a platform config directory
#[derive(Debug)]
pub struct DigestStore {
    path: PathBuf,
}

impl DigestStore {
    /// Create a store handle for the given config root (e.g. `.claude/`)
    pub fn new(config_root: &Path) -> Self {
        Self {
            path: config_root.join(STORE_FILE_NAME),
        }
    }

    /// Path of the backing JSON document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the digest recorded for a target path
    pub fn get(&self, target: &Path) -> Result<Option<String>> {
        let records = self.load()?;
        Ok(records.get(&store_key(target)).cloned())
    }

    /// Record the current content digest of a target path
    ///
    /// Hashes the file as it exists on disk right now, so this must be
    /// called after the target has been written.
    pub fn record(&self, target: &Path) -> Result<()> {
        let mut records = self.load()?;
        records.insert(store_key(target), hash::hash_file_or_empty(target)?);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SkillpackError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let doc = serde_json::to_string_pretty(&records).map_err(|e| {
            SkillpackError::ConfigParseFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        fs::write(&self.path, doc).map_err(|e| SkillpackError::FileWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Load the whole document; an absent store file loads as empty
    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| SkillpackError::FileReadFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| SkillpackError::ConfigParseFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

fn store_key(target: &Path) -> String {
    target.display().to_string()
}
