//! Merge behavior tests: create, update, customization preservation, force

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn skillpack_cmd(ws: &common::TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("skillpack").unwrap();
    cmd.current_dir(&ws.project).args([
        "install",
        "--templates",
        ws.repo.to_str().unwrap(),
        "-y",
    ]);
    cmd
}

#[test]
fn test_fresh_install_creates_files_and_digest_store() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"));

    assert!(ws.project_file_exists(".claude/CLAUDE.md"));
    assert!(ws.project_file_exists(".claude/settings.json"));
    assert!(ws.project_file_exists(".claude/skills/crewai-basics/SKILL.md"));
    assert!(ws.project_file_exists(".claude/skills/crewai-basics/reference/api.md"));
    assert!(ws.project_file_exists(".claude/commands/crew/create.md"));
    assert!(ws.project_file_exists(".claude/.installed-hashes.json"));

    let store = ws.read_project_file(".claude/.installed-hashes.json");
    let records: std::collections::BTreeMap<String, String> =
        serde_json::from_str(&store).unwrap();
    assert!(!records.is_empty());
    assert!(records.values().all(|digest| digest.starts_with("blake3:")));
}

#[test]
fn test_reinstall_is_idempotent() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success();
    let before = ws.read_project_file(".claude/skills/crewai-basics/SKILL.md");

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:"))
        .stdout(predicate::str::contains("Created:").not());

    let after = ws.read_project_file(".claude/skills/crewai-basics/SKILL.md");
    assert_eq!(before, after);
}

#[test]
fn test_customized_file_preserved_with_new_sibling() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success();

    // User edits the installed skill, then the template changes upstream
    ws.write_project_file(".claude/skills/crewai-basics/SKILL.md", "# My edits\n");
    ws.write_repo_file(
        "templates/shared/skills/crewai-basics/SKILL.md",
        "# CrewAI basics v2\n",
    );

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped (customized)"));

    assert_eq!(
        ws.read_project_file(".claude/skills/crewai-basics/SKILL.md"),
        "# My edits\n"
    );
    assert_eq!(
        ws.read_project_file(".claude/skills/crewai-basics/SKILL.md.new"),
        "# CrewAI basics v2\n"
    );
}

#[test]
fn test_force_update_overwrites_customized_file() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success();

    ws.write_project_file(".claude/skills/crewai-basics/SKILL.md", "# My edits\n");
    ws.write_repo_file(
        "templates/shared/skills/crewai-basics/SKILL.md",
        "# CrewAI basics v2\n",
    );

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal", "--update", "--no-backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:"));

    assert_eq!(
        ws.read_project_file(".claude/skills/crewai-basics/SKILL.md"),
        "# CrewAI basics v2\n"
    );

    // A further plain re-install now treats the file as unmodified
    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped").not());
}

#[test]
fn test_forced_update_backs_up_config_root() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal", "--update"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created at"));

    let backup_root = ws.project.join(".skillpack-backup");
    assert!(backup_root.exists());
    let snapshot = std::fs::read_dir(&backup_root)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    assert!(snapshot.join(".claude/CLAUDE.md").exists());
}

#[test]
fn test_no_backup_flag_skips_backup() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal"])
        .assert()
        .success();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "minimal", "--update", "--no-backup"])
        .assert()
        .success();

    assert!(!ws.project.join(".skillpack-backup").exists());
}

#[test]
fn test_package_inheritance_installs_parent_items() {
    let ws = common::TestWorkspace::new();

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "full"])
        .assert()
        .success();

    // Items from minimal and standard arrive through the extends chain
    assert!(ws.project_file_exists(".claude/skills/crewai-basics/SKILL.md"));
    assert!(ws.project_file_exists(".claude/skills/new-crew/SKILL.md"));
    assert!(ws.project_file_exists(".claude/skills/advanced-patterns/SKILL.md"));
    assert!(ws.project_file_exists(".claude/agents/crew-architect.md"));
    assert!(ws.project_file_exists(".claude/commands/crew/create.md"));
}

#[test]
fn test_missing_source_item_warns_but_succeeds() {
    let ws = common::TestWorkspace::new();
    ws.write_repo_file(
        "packages.json",
        r#"{"packages": {"broken": {"description": "", "skills": ["ghost"], "commands": ["crew/create"]}}}"#,
    );

    skillpack_cmd(&ws)
        .args(["-p", "claude", "-k", "broken"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill not found: ghost"));

    assert!(ws.project_file_exists(".claude/commands/crew/create.md"));
}
