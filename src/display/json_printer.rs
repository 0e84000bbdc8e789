//! Colorized JSON pretty-printing for terminal output.
//!
//! Renders JSON values with syntax highlighting:
//! - Field names in cyan
//! - Strings in green
//! - Numbers in yellow
//! - Booleans in magenta
//! - Null in red
//!
//! `colored` disables styling automatically when stdout is not a
//! terminal or `NO_COLOR` is set, so piped output stays clean.

use colored::Colorize;
use serde_json::Value;

/// Print a JSON value with 2-space indentation.
///
/// When `use_color` is false, outputs plain pretty JSON (suitable for
/// machine consumption).
pub fn print_json(value: &Value, use_color: bool) {
    if use_color {
        println!("{}", render(value, 0));
    } else {
        println!("{}", plain_pretty(value));
    }
}

/// Plain pretty JSON without color codes.
pub fn plain_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Recursively render a value with ANSI highlighting.
fn render(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, child)| {
                    format!(
                        "{pad}  {}: {}",
                        quoted(key).cyan(),
                        render(child, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{pad}}}", entries.join(",\n"))
        }
        Value::Array(items) if items.is_empty() => "[]".to_string(),
        Value::Array(items) => {
            let entries: Vec<String> = items
                .iter()
                .map(|child| format!("{pad}  {}", render(child, indent + 1)))
                .collect();
            format!("[\n{}\n{pad}]", entries.join(",\n"))
        }
        Value::String(s) => quoted(s).green().to_string(),
        Value::Number(n) => n.to_string().yellow().to_string(),
        Value::Bool(b) => b.to_string().magenta().to_string(),
        Value::Null => "null".red().to_string(),
    }
}

/// JSON-quote and escape a string without going through a `Result`.
fn quoted(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_pretty_is_valid_json() {
        let value = json!({"alg": "HS256", "nested": {"n": 1, "flag": true, "nothing": null}});
        let rendered = plain_pretty(&value);
        let reparsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(reparsed, value);
    }

    #[test]
    fn test_render_keeps_structure_markers() {
        // In test harnesses colored usually disables itself (no tty),
        // in which case render output is plain text; either way the
        // structure markers must be present.
        let value = json!({"a": [1, "two", false], "b": {}});
        let rendered = render(&value, 0);
        assert!(rendered.contains("\"a\""));
        assert!(rendered.contains("\"two\""));
        assert!(rendered.contains("{}"));
    }

    #[test]
    fn test_quoted_escapes_special_characters() {
        assert_eq!(quoted("a\"b"), r#""a\"b""#);
        assert_eq!(quoted("line\nbreak"), r#""line\nbreak""#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(render(&json!({}), 0), "{}");
        assert_eq!(render(&json!([]), 0), "[]");
    }
}
