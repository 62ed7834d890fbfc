//! Visual Studio `.vstheme` to YAML theme conversion.
//!
//! `vszero-theme` reads the XML theme format used by Visual Studio and
//! produces the YAML theme documents used by the 2026 shell. The conversion
//! renames fields, normalizes ARGB colors to `#rrggbb`, and injects the fixed
//! `Shell` and `ShellInternal` sections.
//!
//! # Pipeline
//!
//! ```text
//! src/*.vstheme ── parse ──▶ ThemeRecord ── merge shell ──▶ to_yaml ──▶ themes/<Identity>.yaml
//! ```
//!
//! - [`document`]: serde model of the XML input
//! - [`parser`]: XML to [`ThemeRecord`]
//! - [`color`]: ARGB normalization
//! - [`shell`]: static supplemental sections
//! - [`serialize`]: YAML emitter with one-line color pairs
//! - [`batch`]: directory conversion
//!
//! # Example
//!
//! ```rust
//! use vszero_theme::{parse_str, to_yaml};
//!
//! let record = parse_str(r#"
//! <Themes>
//!   <Theme Name="Vszero Dark" GUID="{abc-123}" BaseGUID="{def-456}">
//!     <Category Name="Editor" GUID="{cat-1}">
//!       <Color Name="Text">
//!         <Background Type="CT_RAW" Source="FF112233" />
//!       </Color>
//!     </Category>
//!   </Theme>
//! </Themes>"#).unwrap();
//!
//! assert_eq!(record.identity, "Vszero_Dark_2026");
//! let yaml = to_yaml(&record).unwrap();
//! assert!(yaml.contains("Text: ['#112233', null]"));
//! ```

pub mod batch;
pub mod color;
pub mod document;
pub mod error;
pub mod parser;
pub mod record;
pub mod serialize;
pub mod shell;

pub use batch::{
    convert_dir, convert_file, theme_files, BatchConfig, BatchReport, Collision, Converted,
};
pub use color::normalize_argb;
pub use document::ThemeDocument;
pub use error::{ConvertError, Result};
pub use parser::{convert_document, parse_file, parse_str, strip_delimiters};
pub use record::{ColorPair, Section, Sections, ThemeRecord};
pub use serialize::{to_yaml, write_yaml};
pub use shell::{merge_shell_sections, StaticSection, SHELL_SECTIONS};
