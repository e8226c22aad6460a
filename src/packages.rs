//! Package definitions and inheritance resolution
//!
//! `packages.json` names the installable bundles. A package may extend one
//! parent package; the parent's items come first in the resolved lists and
//! duplicates are kept as-is.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SkillpackError};

/// File name of the package definitions in the skills repository root
pub const PACKAGES_FILE_NAME: &str = "packages.json";

/// The whole package definition document
#[derive(Debug, Deserialize)]
pub struct PackagesDoc {
    pub packages: BTreeMap<String, PackageDef>,
}

/// One named package entry
#[derive(Debug, Deserialize)]
pub struct PackageDef {
    pub description: String,
    pub extends: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub workflows: Vec<String>,
    #[serde(default)]
    pub commands: Vec<String>,
}

/// Flattened contents of a package after inheritance resolution
#[derive(Debug, Default, Clone)]
pub struct PackageContents {
    pub skills: Vec<String>,
    pub agents: Vec<String>,
    pub workflows: Vec<String>,
    pub commands: Vec<String>,
}

impl PackageContents {
    /// Total number of identifiers across all item kinds
    pub fn total(&self) -> usize {
        self.skills.len() + self.agents.len() + self.workflows.len() + self.commands.len()
    }
}

impl PackagesDoc {
    /// Load package definitions; a missing document is fatal
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkillpackError::PackagesFileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| SkillpackError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| SkillpackError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Package names in document order
    pub fn names(&self) -> Vec<&str> {
        self.packages.keys().map(String::as_str).collect()
    }

    /// Description of a package, if it exists
    pub fn description(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(|p| p.description.as_str())
    }

    /// Resolve a package into its flat item lists, parent items first
    ///
    /// Inheritance cycles are rejected rather than recursed into.
    pub fn resolve(&self, name: &str) -> Result<PackageContents> {
        let mut chain = Vec::new();
        self.resolve_inner(name, &mut chain)
    }

    fn resolve_inner(&self, name: &str, chain: &mut Vec<String>) -> Result<PackageContents> {
        if chain.iter().any(|seen| seen == name) {
            chain.push(name.to_string());
            return Err(SkillpackError::CircularPackageInheritance {
                chain: chain.join(" -> "),
            });
        }
        chain.push(name.to_string());

        let pkg = self
            .packages
            .get(name)
            .ok_or_else(|| SkillpackError::PackageNotFound {
                name: name.to_string(),
            })?;

        let mut contents = match &pkg.extends {
            Some(parent) => self.resolve_inner(parent, chain)?,
            None => PackageContents::default(),
        };

        contents.skills.extend(pkg.skills.iter().cloned());
        contents.agents.extend(pkg.agents.iter().cloned());
        contents.workflows.extend(pkg.workflows.iter().cloned());
        contents.commands.extend(pkg.commands.iter().cloned());

        Ok(contents)
    }
}
