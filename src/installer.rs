//! Installation orchestrator
//!
//! Sequences the installation of a resolved package for one platform:
//! system prompt and settings (Claude only), then skills, workflows (into
//! the skills namespace), agents (frontmatter adapted per platform) and
//! slash commands. Missing source items are warnings, not failures; there
//! is no rollback of partial progress.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::adapter;
use crate::digest_store::DigestStore;
use crate::error::{Result, SkillpackError};
use crate::merge::{self, MergeAction};
use crate::packages::PackageContents;
use crate::platform::Platform;
use crate::progress::ProgressDisplay;
use crate::ui;

/// One installed (or skipped) target file for the end-of-run report
#[derive(Debug)]
pub struct InstalledItem {
    /// Item path relative to the templates tree, for display
    pub path: String,
    pub action: MergeAction,
}

/// Orchestrates one installation run
pub struct Installer<'a> {
    templates_root: PathBuf,
    target_dir: PathBuf,
    platform: Platform,
    store: &'a DigestStore,
    dry_run: bool,
    force_update: bool,
}

impl<'a> Installer<'a> {
    pub fn new(
        templates_root: PathBuf,
        target_dir: PathBuf,
        platform: Platform,
        store: &'a DigestStore,
        dry_run: bool,
        force_update: bool,
    ) -> Self {
        Self {
            templates_root,
            target_dir,
            platform,
            store,
            dry_run,
            force_update,
        }
    }

    /// Install all package contents in the fixed order
    pub fn install(
        &self,
        contents: &PackageContents,
        progress: &ProgressDisplay,
    ) -> Result<Vec<InstalledItem>> {
        let mut results = Vec::new();

        results.extend(self.install_system_prompt()?);
        results.extend(self.install_item_dirs("skills", "Skill", &contents.skills, progress)?);
        results.extend(self.install_item_dirs(
            "workflows",
            "Workflow",
            &contents.workflows,
            progress,
        )?);
        results.extend(self.install_agents(&contents.agents, progress)?);
        results.extend(self.install_commands(&contents.commands, progress)?);

        Ok(results)
    }

    /// Install CLAUDE.md and settings.json (Claude Code only)
    ///
    /// OpenCode ships its own orchestrator agent and gets no system prompt.
    fn install_system_prompt(&self) -> Result<Vec<InstalledItem>> {
        let mut results = Vec::new();
        if self.platform != Platform::Claude {
            return Ok(results);
        }

        let platform_templates = self.templates_root.join("templates").join("claude");
        let config_root = self.platform.config_root(&self.target_dir);

        for file in ["CLAUDE.md", "settings.json"] {
            let source = platform_templates.join(file);
            if !source.exists() {
                continue;
            }
            let target = config_root.join(file);
            let action = self.merge_copy(&source, &target)?;
            results.push(InstalledItem {
                path: file.to_string(),
                action,
            });
        }

        Ok(results)
    }

    /// Install directory-shaped items (skills and workflows) file by file
    fn install_item_dirs(
        &self,
        kind: &str,
        missing_label: &str,
        names: &[String],
        progress: &ProgressDisplay,
    ) -> Result<Vec<InstalledItem>> {
        let mut results = Vec::new();
        let source_root = self.shared_templates().join(kind);
        let target_root = self.platform.skills_root(&self.target_dir);

        for name in names {
            progress.update_item(&format!("{}/{}", kind, name));
            let source_dir = source_root.join(name);

            if !source_dir.is_dir() {
                ui::warning(&format!("{} not found: {}", missing_label, name));
                progress.inc();
                continue;
            }

            for entry in WalkDir::new(&source_dir).sort_by_file_name() {
                let entry = entry.map_err(|e| SkillpackError::IoError {
                    message: e.to_string(),
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let rel = entry
                    .path()
                    .strip_prefix(&source_dir)
                    .unwrap_or(entry.path());
                let target = target_root.join(name).join(rel);
                let action = self.merge_copy(entry.path(), &target)?;
                results.push(InstalledItem {
                    path: format!("{}/{}/{}", kind, name, rel.display()),
                    action,
                });
            }
            progress.inc();
        }

        Ok(results)
    }

    /// Install agents, adapting frontmatter for the target platform
    fn install_agents(
        &self,
        agents: &[String],
        progress: &ProgressDisplay,
    ) -> Result<Vec<InstalledItem>> {
        let mut results = Vec::new();
        let agents_root = self.shared_templates().join("agents");

        for agent_id in agents {
            progress.update_item(&format!("agents/{}", agent_id));

            // Identifiers look like "crewai/crew-architect"
            let (category, name) = match agent_id.rsplit_once('/') {
                Some((category, name)) => (category, name),
                None => ("", agent_id.as_str()),
            };

            let mut source = agents_root.clone();
            if !category.is_empty() {
                source = source.join(category);
            }
            let source = source.join(format!("{}.md", name));

            if !source.exists() {
                ui::warning(&format!("Agent not found: {}", agent_id));
                progress.inc();
                continue;
            }

            let content =
                fs::read_to_string(&source).map_err(|e| SkillpackError::FileReadFailed {
                    path: source.display().to_string(),
                    reason: e.to_string(),
                })?;
            let adapted = adapter::adapt(&content, self.platform);

            let target = self.platform.agent_target(&self.target_dir, category, name);
            let action = merge::install_content(
                &source,
                &target,
                &adapted,
                self.store,
                self.dry_run,
                self.force_update,
            )?;

            results.push(InstalledItem {
                path: format!("agents/{}.md", agent_id),
                action,
            });
            progress.inc();
        }

        Ok(results)
    }

    /// Install slash commands (shared between platforms)
    fn install_commands(
        &self,
        commands: &[String],
        progress: &ProgressDisplay,
    ) -> Result<Vec<InstalledItem>> {
        let mut results = Vec::new();
        let commands_root = self.shared_templates().join("commands");
        let target_root = self.platform.commands_root(&self.target_dir);

        for cmd_path in commands {
            progress.update_item(&format!("commands/{}", cmd_path));
            let source = commands_root.join(format!("{}.md", cmd_path));
            let target = target_root.join(format!("{}.md", cmd_path));

            if !source.exists() {
                ui::warning(&format!("Command not found: {}", cmd_path));
                progress.inc();
                continue;
            }

            let action = self.merge_copy(&source, &target)?;
            results.push(InstalledItem {
                path: format!("commands/{}.md", cmd_path),
                action,
            });
            progress.inc();
        }

        Ok(results)
    }

    fn shared_templates(&self) -> PathBuf {
        self.templates_root.join("templates").join("shared")
    }

    fn merge_copy(&self, source: &Path, target: &Path) -> Result<MergeAction> {
        merge::copy_with_merge(source, target, self.store, self.dry_run, self.force_update)
    }
}
