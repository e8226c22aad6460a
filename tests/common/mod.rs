//! Common test utilities for Skillpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Agent template used across the fixture tree
#[allow(dead_code)]
pub const AGENT_TEMPLATE: &str = "---\n\
name: crew-architect\n\
description: Designs crew topologies\n\
tools:\n\
  - Read\n\
  - Grep\n\
model: inherit\n\
---\n\n\
You are the crew architect.\n";

/// A test project with a skills repository fixture next to it
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory holding both the project and the fixture repo
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the target project directory
    pub project: PathBuf,
    /// Path to the skills repository (packages.json + templates/)
    pub repo: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a workspace with the standard fixture repository
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let project = temp.path().join("project");
        let repo = temp.path().join("repo");
        std::fs::create_dir_all(&project).expect("Failed to create project directory");

        let ws = Self {
            temp,
            project,
            repo,
        };
        ws.seed_repo();
        ws
    }

    /// Write a file under the project directory
    pub fn write_project_file(&self, path: &str, content: &str) {
        write(&self.project.join(path), content);
    }

    /// Write a file under the fixture repository
    pub fn write_repo_file(&self, path: &str, content: &str) {
        write(&self.repo.join(path), content);
    }

    /// Read a file from the project directory
    pub fn read_project_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.project.join(path)).expect("Failed to read file")
    }

    /// Check whether a file exists in the project directory
    pub fn project_file_exists(&self, path: &str) -> bool {
        self.project.join(path).exists()
    }

    fn seed_repo(&self) {
        self.write_repo_file(
            "packages.json",
            r#"{
  "packages": {
    "minimal": {
      "description": "Core skills and commands",
      "skills": ["crewai-basics"],
      "commands": ["crew/create"]
    },
    "standard": {
      "description": "Recommended setup",
      "extends": "minimal",
      "agents": ["crewai/crew-architect"],
      "workflows": ["new-crew"]
    },
    "full": {
      "description": "Everything",
      "extends": "standard",
      "skills": ["advanced-patterns"]
    }
  }
}
"#,
        );

        self.write_repo_file("templates/claude/CLAUDE.md", "# Crew orchestrator\n");
        self.write_repo_file("templates/claude/settings.json", "{\n  \"permissions\": {}\n}\n");
        self.write_repo_file(
            "templates/shared/skills/crewai-basics/SKILL.md",
            "# CrewAI basics\n",
        );
        self.write_repo_file(
            "templates/shared/skills/crewai-basics/reference/api.md",
            "# API reference\n",
        );
        self.write_repo_file(
            "templates/shared/skills/advanced-patterns/SKILL.md",
            "# Advanced patterns\n",
        );
        self.write_repo_file(
            "templates/shared/workflows/new-crew/SKILL.md",
            "# New crew workflow\n",
        );
        self.write_repo_file(
            "templates/shared/agents/crewai/crew-architect.md",
            AGENT_TEMPLATE,
        );
        self.write_repo_file(
            "templates/shared/commands/crew/create.md",
            "Create a new crew.\n",
        );
    }
}

fn write(path: &std::path::Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
