//! YAML output for converted themes.
//!
//! `serde_yaml` writes every sequence in block form, but theme files keep
//! each color pair on one line:
//!
//! ```yaml
//! Sections:
//!   Editor:
//!     GUID: cat-1
//!     Text: ['#112233', null]
//! ```
//!
//! The data is first turned into an ordered [`serde_yaml::Value`] and then
//! written by a small block emitter. Sequences holding only scalars use flow
//! style; everything else is block style with two-space indentation.
//! Scalars are rendered by `serde_yaml` so quoting follows its rules.

use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{ConvertError, Result};

const INDENT: usize = 2;

/// Words that YAML 1.1 readers resolve to booleans. Written plain they would
/// not load back as strings there, so they are always single-quoted.
const YAML11_BOOLEANS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "true", "True", "TRUE", "false",
    "False", "FALSE", "on", "On", "ON", "off", "Off", "OFF",
];

/// Characters that end a plain scalar inside a flow sequence.
const FLOW_INDICATORS: &[char] = &[',', '[', ']', '{', '}'];

/// Serializes data to a YAML document with flow-style scalar sequences.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let value = serde_yaml::to_value(data)?;
    let mut out = String::new();
    if is_block(&value) {
        emit_block(&mut out, &value, 0)?;
    } else {
        out.push_str(&inline(&value)?);
        out.push('\n');
    }
    Ok(out)
}

/// Serializes data and writes it to `path`, replacing any existing file.
pub fn write_yaml<T: Serialize, P: AsRef<Path>>(data: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let yaml = to_yaml(data)?;
    std::fs::write(path, yaml).map_err(|source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `key: value` at `indent`, recursing into block collections.
fn emit_entry(out: &mut String, key: &Value, value: &Value, indent: usize) -> Result<()> {
    out.push_str(&format!("{:indent$}{}:", "", scalar(key)?, indent = indent));
    if is_block(value) {
        out.push('\n');
        emit_block(out, value, indent + INDENT)
    } else {
        out.push_str(&format!(" {}\n", inline(value)?));
        Ok(())
    }
}

/// Writes the body of a non-empty block mapping or sequence.
fn emit_block(out: &mut String, value: &Value, indent: usize) -> Result<()> {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                emit_entry(out, key, child, indent)?;
            }
        }
        Value::Sequence(items) => {
            for item in items {
                out.push_str(&format!("{:indent$}-", "", indent = indent));
                if is_block(item) {
                    out.push('\n');
                    emit_block(out, item, indent + INDENT)?;
                } else {
                    out.push_str(&format!(" {}\n", inline(item)?));
                }
            }
        }
        Value::Tagged(tagged) => emit_block(out, &tagged.value, indent)?,
        _ => {}
    }
    Ok(())
}

/// Whether a value needs its own indented block.
fn is_block(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => !map.is_empty(),
        Value::Sequence(items) => !items.is_empty() && !items.iter().all(is_scalar),
        Value::Tagged(tagged) => is_block(&tagged.value),
        _ => false,
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(
        value,
        Value::Mapping(_) | Value::Sequence(_) | Value::Tagged(_)
    )
}

/// Renders a value that fits on the current line.
fn inline(value: &Value) -> Result<String> {
    match value {
        Value::Mapping(_) => Ok("{}".to_string()),
        Value::Sequence(items) => {
            let rendered = items
                .iter()
                .map(flow_scalar)
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("[{}]", rendered.join(", ")))
        }
        other => scalar(other),
    }
}

/// Renders a scalar in block context.
///
/// Strings that `serde_yaml` would spread over several lines (block
/// literals, folded long lines) are written double-quoted instead.
fn scalar(value: &Value) -> Result<String> {
    if let Value::String(s) = value {
        if YAML11_BOOLEANS.contains(&s.as_str()) {
            return Ok(format!("'{}'", s));
        }
    }
    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.trim_end_matches('\n');
    if rendered.contains('\n') {
        return quoted(value, rendered);
    }
    Ok(rendered.to_string())
}

/// Renders a scalar inside a flow sequence.
fn flow_scalar(value: &Value) -> Result<String> {
    let rendered = scalar(value)?;
    let is_plain = !rendered.starts_with(['\'', '"']);
    if is_plain && rendered.contains(FLOW_INDICATORS) {
        return quoted(value, &rendered);
    }
    Ok(rendered)
}

fn quoted(value: &Value, rendered: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(serde_json::to_string(s)?),
        _ => Ok(serde_json::to_string(rendered)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{ColorPair, Section, Sections, ThemeRecord};

    fn sample_record() -> ThemeRecord {
        let mut record = ThemeRecord::new();
        record.set_declared_name("Vszero Dark");
        record.guid = "abc-123".into();
        record.base_guid = "def-456".into();
        let mut sections = Sections::new();
        sections.insert(
            "Editor",
            Section::new("cat-1")
                .with_color("Text", ColorPair::background("#112233"))
                .with_color("Caret", ColorPair::new(None, Some("#ffffff".into()))),
        );
        record.sections = sections;
        record
    }

    #[test]
    fn test_to_yaml_full_document() {
        let yaml = to_yaml(&sample_record()).unwrap();
        let expected = "\
Name: Vszero Dark 2026
Identity: Vszero_Dark_2026
Version: 1.0.0.2026
GUID: abc-123
BaseGUID: def-456
Author: PhilikusHD
Description: A Visual Studio 2026 theme.
Tags: Dark
Icon: vszero-_mini.png
Sections:
  Editor:
    GUID: cat-1
    Text: ['#112233', null]
    Caret: [null, '#ffffff']
";
        assert_eq!(yaml, expected);
    }

    #[test]
    fn test_to_yaml_parses_back() {
        let yaml = to_yaml(&sample_record()).unwrap();
        let value: Value = serde_yaml::from_str(&yaml).unwrap();
        let text = &value["Sections"]["Editor"]["Text"];
        assert_eq!(text[0].as_str(), Some("#112233"));
        assert!(text[1].is_null());
    }

    #[test]
    fn test_to_yaml_keeps_non_ascii() {
        let mut record = sample_record();
        record.set_declared_name("Café Noir");
        let yaml = to_yaml(&record).unwrap();
        assert!(yaml.contains("Café Noir 2026"));
        assert!(yaml.contains("Café_Noir_2026"));
    }

    #[test]
    fn test_to_yaml_block_sequence_of_mappings() {
        let value: Value = serde_yaml::from_str("items:\n- name: a\n- name: b\n").unwrap();
        let yaml = to_yaml(&value).unwrap();
        assert_eq!(yaml, "items:\n  -\n    name: a\n  -\n    name: b\n");
        let back: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_to_yaml_empty_collections() {
        let value: Value = serde_yaml::from_str("a: {}\nb: []\n").unwrap();
        assert_eq!(to_yaml(&value).unwrap(), "a: {}\nb: []\n");
    }

    #[test]
    fn test_flow_scalar_quotes_indicators() {
        let value: Value = serde_yaml::from_str("pair: ['a, b', null]\n").unwrap();
        let yaml = to_yaml(&value).unwrap();
        let back: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_multiline_scalar_is_double_quoted() {
        let value: Value = serde_yaml::from_str("note: \"line one\\nline two\"\n").unwrap();
        let yaml = to_yaml(&value).unwrap();
        assert_eq!(yaml, "note: \"line one\\nline two\"\n");
    }

    #[test]
    fn test_yaml11_boolean_words_are_quoted() {
        let mut sections = Sections::new();
        sections.insert(
            "on",
            Section::new("cat-1")
                .with_color("yes", ColorPair::new(None, Some("#00ff00".into())))
                .with_color("Off", ColorPair::background("no")),
        );
        let yaml = to_yaml(&sections).unwrap();
        assert_eq!(
            yaml,
            "'on':\n  GUID: cat-1\n  'yes': [null, '#00ff00']\n  'Off': ['no', null]\n"
        );
        let back: Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back["on"]["yes"][1].as_str(), Some("#00ff00"));
    }

    #[test]
    fn test_unnamed_entries_render_as_null_keys() {
        let mut section = Section::new("c");
        section.set_entry(None, ColorPair::background("#112233"));
        let mut sections = Sections::new();
        sections.insert_entry(None, section);
        let yaml = to_yaml(&sections).unwrap();
        assert_eq!(yaml, "null:\n  GUID: c\n  null: ['#112233', null]\n");
    }

    #[test]
    fn test_write_yaml_overwrites() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Vszero_Dark_2026.yaml");
        std::fs::write(&path, "stale").unwrap();

        write_yaml(&sample_record(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Name: Vszero Dark 2026\n"));
    }

    #[test]
    fn test_write_yaml_missing_dir() {
        let result = write_yaml(&sample_record(), "/nonexistent/dir/out.yaml");
        assert!(matches!(result, Err(ConvertError::Write { .. })));
    }
}
