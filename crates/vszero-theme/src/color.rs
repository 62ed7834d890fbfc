//! ARGB color normalization.
//!
//! `.vstheme` files store colors as 8-digit ARGB strings (`FF1E1E1E`), where
//! the first two digits are the alpha channel. The YAML themes want
//! `#rrggbb`, so the alpha is dropped and the rest lowercased.
//!
//! # Example
//!
//! ```rust
//! use vszero_theme::color::normalize_argb;
//!
//! assert_eq!(normalize_argb(Some("FF1E1E1E")), Some("#1e1e1e".to_string()));
//! assert_eq!(normalize_argb(Some("1E1E1E")), None);
//! assert_eq!(normalize_argb(None), None);
//! ```

/// Number of characters in an ARGB color source.
pub const ARGB_LEN: usize = 8;

/// Number of leading alpha characters dropped from an ARGB source.
const ALPHA_LEN: usize = 2;

/// Converts an 8-character ARGB string into a lowercase `#rrggbb` string.
///
/// Any input that is not exactly 8 characters long (including an empty or
/// missing source) yields `None`. The remaining characters are not checked
/// for being hex digits; they are passed through lowercased.
pub fn normalize_argb(source: Option<&str>) -> Option<String> {
    let source = source?;
    if source.chars().count() != ARGB_LEN {
        return None;
    }

    let rgb: String = source.chars().skip(ALPHA_LEN).collect();
    Some(format!("#{}", rgb.to_lowercase()))
}
