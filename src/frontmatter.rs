//! Frontmatter parsing and serialization (YAML between --- delimiters)
//!
//! Documents that do not open with a delimiter, or that never close it,
//! are treated as having no frontmatter rather than as errors.

use serde_yaml::Mapping;

use crate::error::Result;

/// Split a markdown document into its frontmatter block and body
///
/// The body starts after the closing delimiter, minus leading blank lines.
/// Returns `None` when the document does not begin with `---` or has no
/// closing delimiter.
pub fn split(content: &str) -> Option<(&str, &str)> {
    let after_open = content.strip_prefix("---\n")?;
    let end = after_open.find("\n---")?;

    let frontmatter = &after_open[..end + 1];
    let body = after_open[end + 4..].trim_start_matches(['\r', '\n']);

    Some((frontmatter, body))
}

/// Serialize a frontmatter mapping and reattach the body
///
/// Keys are emitted in insertion order.
pub fn render(frontmatter: &Mapping, body: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(frontmatter)?;
    Ok(format!("---\n{}---\n\n{}", yaml, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_split_basic() {
        let content = "---\nname: reviewer\n---\n\nBody text\n";
        let (fm, body) = split(content).unwrap();
        assert_eq!(fm, "name: reviewer\n");
        assert_eq!(body, "Body text\n");
    }

    #[test]
    fn test_split_strips_leading_blank_lines_only() {
        let content = "---\nname: reviewer\n---\n\n\n  indented body";
        let (_, body) = split(content).unwrap();
        assert_eq!(body, "  indented body");
    }

    #[test]
    fn test_split_no_opening_delimiter() {
        assert!(split("name: reviewer\n").is_none());
    }

    #[test]
    fn test_split_unterminated() {
        assert!(split("---\nname: reviewer\n").is_none());
    }

    #[test]
    fn test_render_preserves_insertion_order() {
        let mut fm = Mapping::new();
        fm.insert("zeta".into(), Value::from("first"));
        fm.insert("alpha".into(), Value::from("second"));

        let out = render(&fm, "body").unwrap();
        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_render_roundtrips_through_split() {
        let mut fm = Mapping::new();
        fm.insert("name".into(), Value::from("reviewer"));

        let out = render(&fm, "The body.").unwrap();
        let (fm_str, body) = split(&out).unwrap();
        assert!(fm_str.contains("name: reviewer"));
        assert_eq!(body, "The body.");
    }
}
