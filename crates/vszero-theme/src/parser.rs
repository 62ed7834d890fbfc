//! `.vstheme` to [`ThemeRecord`] transformation.
//!
//! # Rules
//!
//! - `Name` is the declared name plus `" 2026"`; `Identity` is derived from
//!   the declared name (see [`record::identity`](crate::record::identity)).
//! - GUIDs lose their enclosing delimiters (see [`strip_delimiters`]).
//! - Each `<Color>` becomes a `[background, foreground]` pair normalized
//!   through [`normalize_argb`].
//! - Every `<Theme>` in the file is applied in order. Scalar fields are
//!   overwritten, so the last theme wins, while categories from all themes
//!   accumulate into the same `Sections`.
//! - The fixed shell sections are merged last.

use std::path::Path;

use tracing::{debug, warn};

use crate::color::normalize_argb;
use crate::document::{CategoryElement, ThemeDocument, ThemeElement};
use crate::error::{ConvertError, Result};
use crate::record::{ColorPair, Section, ThemeRecord};
use crate::shell::merge_shell_sections;

/// Removes exactly one leading and one trailing character after trimming
/// surrounding whitespace.
///
/// Precondition: the value is wrapped in a delimiter pair, as in
/// `{1a2b3c4d-...}`. The delimiters are not checked; a value that does not
/// start with `{` and end with `}` is still stripped and a warning is
/// logged. Values shorter than two characters become empty.
pub fn strip_delimiters(value: &str) -> String {
    let trimmed = value.trim();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        warn!(guid = %value, "GUID is not enclosed in braces; stripping outer characters anyway");
    }

    let count = trimmed.chars().count();
    if count < 2 {
        return String::new();
    }
    trimmed.chars().skip(1).take(count - 2).collect()
}

/// Reads and converts a `.vstheme` file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ThemeRecord> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = ThemeDocument::from_xml(&content).map_err(|source| ConvertError::Xml {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(convert_document(&document))
}

/// Path reported in errors for in-memory input.
pub const INLINE_SOURCE: &str = "<string>";

/// Converts `.vstheme` XML text.
///
/// Errors name [`INLINE_SOURCE`] as their path; use [`parse_file`] for
/// file-backed input.
pub fn parse_str(xml: &str) -> Result<ThemeRecord> {
    let document = ThemeDocument::from_xml(xml).map_err(|source| ConvertError::Xml {
        path: INLINE_SOURCE.into(),
        source,
    })?;
    Ok(convert_document(&document))
}

/// Builds the output record from a decoded document.
pub fn convert_document(document: &ThemeDocument) -> ThemeRecord {
    let mut record = ThemeRecord::new();

    for theme in &document.themes {
        apply_theme(&mut record, theme);
    }

    merge_shell_sections(&mut record.sections);
    record
}

fn apply_theme(record: &mut ThemeRecord, theme: &ThemeElement) {
    record.set_declared_name(&theme.name);
    record.guid = strip_delimiters(&theme.guid);
    record.base_guid = strip_delimiters(&theme.base_guid);

    for category in &theme.categories {
        debug!(
            theme = %theme.name,
            category = ?category.name,
            colors = category.colors.len(),
            "converting category"
        );
        record
            .sections
            .insert_entry(category.name.clone(), convert_category(category));
    }
}

fn convert_category(category: &CategoryElement) -> Section {
    let mut section = Section::new(strip_delimiters(&category.guid));
    for color in &category.colors {
        let pair = ColorPair::new(
            normalize_argb(color.background_source()),
            normalize_argb(color.foreground_source()),
        );
        section.set_entry(color.name.clone(), pair);
    }
    section
}
