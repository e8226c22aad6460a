//! Target platform layouts
//!
//! The two supported assistant config layouts differ in their root
//! directory, command directory naming and agent placement. Everything
//! else (skills, workflows) lands in the same relative locations.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::SkillpackError;

/// A supported assistant config layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Claude,
    OpenCode,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Claude, Platform::OpenCode];

    /// Stable identifier used on the CLI
    pub fn id(self) -> &'static str {
        match self {
            Platform::Claude => "claude",
            Platform::OpenCode => "opencode",
        }
    }

    /// Human-readable name for prompts
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Claude => "Claude Code",
            Platform::OpenCode => "OpenCode",
        }
    }

    /// Config directory name under the target directory
    pub fn config_dir(self) -> &'static str {
        match self {
            Platform::Claude => ".claude",
            Platform::OpenCode => ".opencode",
        }
    }

    /// Absolute config root for a target directory
    pub fn config_root(self, target_dir: &Path) -> PathBuf {
        target_dir.join(self.config_dir())
    }

    /// Skills namespace; workflows install here too
    pub fn skills_root(self, target_dir: &Path) -> PathBuf {
        self.config_root(target_dir).join("skills")
    }

    /// Slash command directory (OpenCode uses the singular form)
    pub fn commands_root(self, target_dir: &Path) -> PathBuf {
        match self {
            Platform::Claude => self.config_root(target_dir).join("commands"),
            Platform::OpenCode => self.config_root(target_dir).join("command"),
        }
    }

    /// Target path for an agent file
    ///
    /// Claude flattens agents into one directory; OpenCode nests subagents
    /// under their category.
    pub fn agent_target(self, target_dir: &Path, category: &str, name: &str) -> PathBuf {
        let file = format!("{}.md", name);
        match self {
            Platform::Claude => self.config_root(target_dir).join("agents").join(file),
            Platform::OpenCode => {
                let mut path = self.config_root(target_dir).join("agent").join("subagents");
                if !category.is_empty() {
                    path = path.join(category);
                }
                path.join(file)
            }
        }
    }

    /// Detect an existing installation by the presence of a config root
    pub fn detect(target_dir: &Path) -> Option<Platform> {
        Platform::ALL
            .into_iter()
            .find(|p| p.config_root(target_dir).exists())
    }
}

impl FromStr for Platform {
    type Err = SkillpackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "claude" => Ok(Platform::Claude),
            "opencode" => Ok(Platform::OpenCode),
            other => Err(SkillpackError::PlatformNotSupported {
                platform: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
