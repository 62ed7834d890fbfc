//! Property-based tests for the conversion rules.

use proptest::prelude::*;
use vszero_theme::record::{display_name, identity};
use vszero_theme::{normalize_argb, parse_str, strip_delimiters};

// ============================================================================
// Strategies
// ============================================================================

/// Theme names safe to embed in an XML attribute.
fn theme_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{0,24}"
}

proptest! {
    /// Eight-character sources keep the last six characters, lowercased.
    #[test]
    fn normalize_eight_chars(s in "[0-9A-Fa-f]{8}") {
        let expected = format!("#{}", s[2..].to_lowercase());
        prop_assert_eq!(normalize_argb(Some(s.as_str())), Some(expected));
    }

    /// Any other length normalizes to nothing.
    #[test]
    fn normalize_other_lengths(s in "[0-9A-Za-z]{0,16}") {
        prop_assume!(s.chars().count() != 8);
        prop_assert_eq!(normalize_argb(Some(s.as_str())), None);
    }

    #[test]
    fn identity_and_name_rules(n in theme_name()) {
        prop_assert_eq!(identity(&n), format!("{}_2026", n.trim().replace(' ', "_")));
        prop_assert_eq!(display_name(&n), format!("{} 2026", n));
    }

    /// Exactly one leading and one trailing character are removed.
    #[test]
    fn strip_removes_outer_chars(
        first in "[^\\s]",
        inner in "[a-z0-9-]{0,36}",
        last in "[^\\s]",
    ) {
        let value = format!("{}{}{}", first, inner, last);
        prop_assert_eq!(strip_delimiters(&value), inner);
    }

    /// Parsed records always carry both shell sections, with or without categories.
    #[test]
    fn shell_sections_always_present(
        n in theme_name(),
        categories in prop::collection::vec("[A-Z][a-z]{0,8}", 0..4),
    ) {
        let body: String = categories
            .iter()
            .map(|c| format!(r#"<Category Name="{}" GUID="{{cat}}" />"#, c))
            .collect();
        let xml = format!(
            r#"<Themes><Theme Name="{}" GUID="{{g}}" BaseGUID="{{b}}">{}</Theme></Themes>"#,
            n, body
        );

        let record = parse_str(&xml).unwrap();
        prop_assert_eq!(record.sections.get("Shell").map(|s| s.len()), Some(9));
        prop_assert_eq!(record.sections.get("ShellInternal").map(|s| s.len()), Some(7));
    }
}
