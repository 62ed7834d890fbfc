//! Input model for `.vstheme` XML documents.
//!
//! The document is decoded with `quick-xml`'s serde support. Attributes are
//! mapped with the `@` prefix; unknown attributes (such as the `Type` of a
//! color source) and unknown elements are ignored.
//!
//! ```xml
//! <Themes>
//!   <Theme Name="Vszero Dark" GUID="{...}" BaseGUID="{...}">
//!     <Category Name="Editor" GUID="{...}">
//!       <Color Name="Text">
//!         <Background Type="CT_RAW" Source="FF112233" />
//!       </Color>
//!     </Category>
//!   </Theme>
//! </Themes>
//! ```

use serde::Deserialize;

/// Root of a `.vstheme` file. The root element's own name is not checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeDocument {
    #[serde(rename = "Theme", default)]
    pub themes: Vec<ThemeElement>,
}

/// A `<Theme>` element. All three attributes are required.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeElement {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@GUID")]
    pub guid: String,
    #[serde(rename = "@BaseGUID")]
    pub base_guid: String,
    #[serde(rename = "Category", default)]
    pub categories: Vec<CategoryElement>,
}

/// A `<Category>` element. A missing `Name` becomes a `null` section key.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryElement {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,
    #[serde(rename = "@GUID")]
    pub guid: String,
    #[serde(rename = "Color", default)]
    pub colors: Vec<ColorElement>,
}

/// A `<Color>` element with optional background and foreground sources.
///
/// A missing `Name` becomes a `null` color key.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorElement {
    #[serde(rename = "@Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Background", default)]
    pub background: Option<ColorSource>,
    #[serde(rename = "Foreground", default)]
    pub foreground: Option<ColorSource>,
}

/// A `<Background>` or `<Foreground>` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorSource {
    #[serde(rename = "@Source", default)]
    pub source: Option<String>,
}

impl ColorElement {
    /// Raw ARGB source of the background, if both element and attribute exist.
    pub fn background_source(&self) -> Option<&str> {
        self.background.as_ref().and_then(|c| c.source.as_deref())
    }

    /// Raw ARGB source of the foreground, if both element and attribute exist.
    pub fn foreground_source(&self) -> Option<&str> {
        self.foreground.as_ref().and_then(|c| c.source.as_deref())
    }
}

impl ThemeDocument {
    /// Decodes a document from XML text.
    ///
    /// A leading byte order mark is skipped.
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        quick_xml::de::from_str(xml)
    }
}
