//! Output record for converted themes.
//!
//! A [`ThemeRecord`] is the ordered mapping written to YAML. Field order in
//! the struct is the key order in the output document:
//!
//! ```yaml
//! Name: Vszero Dark 2026
//! Identity: Vszero_Dark_2026
//! Version: 1.0.0.2026
//! GUID: abc-123
//! BaseGUID: def-456
//! Author: PhilikusHD
//! Description: A Visual Studio 2026 theme.
//! Tags: Dark
//! Icon: vszero-_mini.png
//! Sections:
//!   Editor:
//!     GUID: cat-1
//!     Text: ['#112233', null]
//! ```
//!
//! Sections and colors keep insertion order. Inserting an existing name
//! replaces the value but keeps its original position, so later duplicates in
//! the input win without reordering the output.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Suffix appended to the declared theme name.
pub const NAME_SUFFIX: &str = " 2026";
/// Suffix appended to the derived identity.
pub const IDENTITY_SUFFIX: &str = "_2026";

/// Fixed `Version` field.
pub const VERSION: &str = "1.0.0.2026";
/// Fixed `Author` field.
pub const AUTHOR: &str = "PhilikusHD";
/// Fixed `Description` field.
pub const DESCRIPTION: &str = "A Visual Studio 2026 theme.";
/// Fixed `Tags` field.
pub const TAGS: &str = "Dark";
/// Fixed `Icon` field.
pub const ICON: &str = "vszero-_mini.png";

/// Returns the output display name for a declared theme name.
pub fn display_name(declared: &str) -> String {
    format!("{}{}", declared, NAME_SUFFIX)
}

/// Returns the identity slug for a declared theme name.
///
/// Surrounding whitespace is trimmed and inner spaces become underscores.
/// The identity doubles as the output file stem.
pub fn identity(declared: &str) -> String {
    format!("{}{}", declared.trim().replace(' ', "_"), IDENTITY_SUFFIX)
}

/// Key of a section or color. `None` when the XML element has no `Name`,
/// written as a `null` key.
pub type EntryKey = Option<String>;

/// Inserts or replaces `key` in an insertion-ordered list.
fn upsert<V>(entries: &mut Vec<(EntryKey, V)>, key: EntryKey, value: V) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = value,
        None => entries.push((key, value)),
    }
}

fn lookup<'a, V>(entries: &'a [(EntryKey, V)], key: Option<&str>) -> Option<&'a V> {
    entries
        .iter()
        .find(|(k, _)| k.as_deref() == key)
        .map(|(_, v)| v)
}

/// A `[background, foreground]` pair of normalized colors.
///
/// Serializes as a two-element sequence; a missing side is `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub background: Option<String>,
    pub foreground: Option<String>,
}

impl ColorPair {
    pub fn new(background: Option<String>, foreground: Option<String>) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// A pair with only a background color.
    pub fn background(color: impl Into<String>) -> Self {
        Self::new(Some(color.into()), None)
    }
}

impl Serialize for ColorPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.background, &self.foreground).serialize(serializer)
    }
}

/// One category of a theme: its GUID and its ordered colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    guid: String,
    colors: Vec<(EntryKey, ColorPair)>,
}

impl Section {
    pub fn new(guid: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            colors: Vec::new(),
        }
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// Sets a color, replacing an existing one of the same name in place.
    pub fn set_color(&mut self, name: impl Into<String>, pair: ColorPair) {
        self.set_entry(Some(name.into()), pair);
    }

    /// Sets a color whose name may be missing.
    pub fn set_entry(&mut self, name: EntryKey, pair: ColorPair) {
        upsert(&mut self.colors, name, pair);
    }

    /// Builder form of [`set_color`](Self::set_color).
    pub fn with_color(mut self, name: impl Into<String>, pair: ColorPair) -> Self {
        self.set_color(name, pair);
        self
    }

    pub fn color(&self, name: &str) -> Option<&ColorPair> {
        lookup(&self.colors, Some(name))
    }

    /// The color stored under `name`, where `None` is the unnamed color.
    pub fn entry(&self, name: Option<&str>) -> Option<&ColorPair> {
        lookup(&self.colors, name)
    }

    /// Colors in insertion order.
    pub fn colors(&self) -> impl Iterator<Item = (Option<&str>, &ColorPair)> {
        self.colors.iter().map(|(k, v)| (k.as_deref(), v))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

// `GUID` is written first. A color that is itself named `GUID` reuses that
// key; the ordered value tree keeps the first position and the last value.
impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len() + 1))?;
        map.serialize_entry("GUID", &self.guid)?;
        for (name, pair) in &self.colors {
            map.serialize_entry(name, pair)?;
        }
        map.end()
    }
}

/// Ordered mapping of category name to [`Section`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections(Vec<(EntryKey, Section)>);

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a section, replacing one of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, section: Section) {
        self.insert_entry(Some(name.into()), section);
    }

    /// Inserts a section whose name may be missing.
    pub fn insert_entry(&mut self, name: EntryKey, section: Section) {
        upsert(&mut self.0, name, section);
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        lookup(&self.0, Some(name))
    }

    /// The section stored under `name`, where `None` is the unnamed section.
    pub fn entry(&self, name: Option<&str>) -> Option<&Section> {
        lookup(&self.0, name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Section names in insertion order; `None` for an unnamed section.
    pub fn names(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(|(k, _)| k.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &Section)> {
        self.0.iter().map(|(k, v)| (k.as_deref(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, section) in &self.0 {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

/// A fully converted theme, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Identity")]
    pub identity: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "GUID")]
    pub guid: String,
    #[serde(rename = "BaseGUID")]
    pub base_guid: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    #[serde(rename = "Icon")]
    pub icon: String,
    #[serde(rename = "Sections")]
    pub sections: Sections,
}

impl ThemeRecord {
    /// Creates a record with the fixed metadata and empty theme fields.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            identity: String::new(),
            version: VERSION.to_string(),
            guid: String::new(),
            base_guid: String::new(),
            author: AUTHOR.to_string(),
            description: DESCRIPTION.to_string(),
            tags: TAGS.to_string(),
            icon: ICON.to_string(),
            sections: Sections::new(),
        }
    }

    /// Sets `Name` and `Identity` from a declared theme name.
    pub fn set_declared_name(&mut self, declared: &str) {
        self.identity = identity(declared);
        self.name = display_name(declared);
    }

    /// Output file name (`<Identity>.yaml`).
    pub fn file_name(&self) -> String {
        format!("{}.yaml", self.identity)
    }
}

impl Default for ThemeRecord {
    fn default() -> Self {
        Self::new()
    }
}
