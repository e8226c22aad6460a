//! Agent frontmatter adaptation between platform schemas
//!
//! Agent templates live in a shared tree with a platform-neutral schema.
//! Installing one rewrites the frontmatter into the target platform's
//! field set and reattaches the markdown body unchanged.
//!
//! Non-conforming input (no delimiters, unparseable YAML, non-mapping
//! frontmatter) is returned verbatim: it is treated as already
//! platform-native, not as an error.

use serde_yaml::{Mapping, Number, Value};

use crate::frontmatter;
use crate::platform::Platform;

/// Sentinel model value meaning "use the platform default"
const MODEL_INHERIT: &str = "inherit";

/// Shell patterns subagents may run without confirmation (read-only commands)
const BASH_ALLOW_LIST: [&str; 8] = [
    "ls *", "cat *", "head *", "tail *", "find *", "grep *", "pwd", "tree *",
];

/// Rewrite an agent document's frontmatter for the target platform
pub fn adapt(content: &str, platform: Platform) -> String {
    let Some((fm_str, body)) = frontmatter::split(content) else {
        return content.to_string();
    };

    let Ok(fm) = serde_yaml::from_str::<Value>(fm_str) else {
        return content.to_string();
    };
    if !fm.is_mapping() {
        return content.to_string();
    }

    let adapted = match platform {
        Platform::Claude => claude_frontmatter(&fm),
        Platform::OpenCode => opencode_frontmatter(&fm),
    };

    match frontmatter::render(&adapted, body) {
        Ok(out) => out,
        Err(_) => content.to_string(),
    }
}

/// Claude Code schema: name, description, comma-joined tools, skills, model
fn claude_frontmatter(fm: &Value) -> Mapping {
    let mut out = Mapping::new();

    out.insert("name".into(), str_field(fm, "name"));
    out.insert("description".into(), str_field(fm, "description"));

    let tools = string_list(fm, "tools");
    if !tools.is_empty() {
        out.insert("tools".into(), Value::from(tools.join(", ")));
    }

    if let Some(skills) = fm.get("skills") {
        if skills.as_sequence().is_some_and(|s| !s.is_empty()) {
            out.insert("skills".into(), skills.clone());
        }
    }

    if let Some(model) = fm.get("model").and_then(Value::as_str) {
        if model != MODEL_INHERIT {
            out.insert("model".into(), Value::from(model));
        }
    }

    out
}

/// OpenCode subagent schema: identity metadata, tool map, permission policy
fn opencode_frontmatter(fm: &Value) -> Mapping {
    let name = fm.get("name").and_then(Value::as_str).unwrap_or("");

    let mut out = Mapping::new();
    out.insert("id".into(), Value::from(name));
    out.insert("name".into(), Value::from(display_name(name)));
    out.insert("category".into(), Value::from("subagents/crewai"));
    out.insert("type".into(), Value::from("subagent"));
    out.insert("version".into(), Value::from("1.0.0"));
    out.insert("author".into(), Value::from("crewai-skills"));
    out.insert("description".into(), str_field(fm, "description"));
    out.insert("mode".into(), Value::from("subagent"));
    out.insert("temperature".into(), Value::Number(Number::from(1.0)));

    // Missing tools behave as an empty list; a non-list value drops the key
    let tools = match fm.get("tools") {
        None => Some(Vec::new()),
        Some(v) => v
            .as_sequence()
            .map(|seq| seq.iter().filter_map(Value::as_str).collect::<Vec<_>>()),
    };
    if let Some(tools) = tools {
        let mut map = Mapping::new();
        for tool in tools {
            map.insert(opencode_tool_name(tool).into(), Value::Bool(true));
        }
        // Subagents may not themselves delegate
        map.insert("task".into(), Value::Bool(false));
        out.insert("tools".into(), Value::Mapping(map));
    }

    out.insert("permission".into(), default_permissions());

    out
}

/// Deny shell by default except read-only commands; file edits require
/// confirmation
fn default_permissions() -> Value {
    let mut bash = Mapping::new();
    bash.insert("*".into(), Value::from("deny"));
    for pattern in BASH_ALLOW_LIST {
        bash.insert(pattern.into(), Value::from("allow"));
    }

    let mut permission = Mapping::new();
    permission.insert("bash".into(), Value::Mapping(bash));
    permission.insert("edit".into(), Value::from("ask"));
    Value::Mapping(permission)
}

/// Map a shared-template tool name to the OpenCode tool identifier
///
/// Unrecognized tools pass through lower-cased.
fn opencode_tool_name(tool: &str) -> String {
    match tool {
        "Read" => "read".to_string(),
        "Write" => "write".to_string(),
        "Edit" => "edit".to_string(),
        "Grep" => "grep".to_string(),
        "Glob" => "glob".to_string(),
        "Bash" => "bash".to_string(),
        "Task" => "task".to_string(),
        "Skill" => "skill".to_string(),
        other => other.to_lowercase(),
    }
}

/// Identifier-like display label: drop hyphens and title-case the words
/// between them ("crew-architect" becomes "CrewArchitect"). A letter after
/// any non-letter starts a new word, so digits re-capitalize too
/// ("crew2go" becomes "Crew2Go").
fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut word_start = true;
    for c in name.chars() {
        if c == '-' {
            word_start = true;
            continue;
        }
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = !c.is_alphabetic();
    }
    out
}

fn str_field(fm: &Value, key: &str) -> Value {
    fm.get(key)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

fn string_list(fm: &Value, key: &str) -> Vec<String> {
    fm.get(key)
        .and_then(Value::as_sequence)
        .map(|seq| {
            seq.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
