//! Fixed `Shell` and `ShellInternal` sections.
//!
//! These sections are not present in `.vstheme` files but are required by
//! the 2026 shell. They are merged into every converted theme after the
//! parsed categories, replacing any parsed category with the same name.
//! Only backgrounds are set; some values carry an alpha byte (`#rrggbbaa`)
//! and are written unchanged.

use crate::record::{ColorPair, Section, Sections};

/// A section defined at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticSection {
    pub name: &'static str,
    pub guid: &'static str,
    /// `(color name, background)` in output order.
    pub colors: &'static [(&'static str, &'static str)],
}

impl StaticSection {
    /// Builds an owned [`Section`] with null foregrounds.
    pub fn to_section(&self) -> Section {
        self.colors
            .iter()
            .fold(Section::new(self.guid), |section, (name, background)| {
                section.with_color(*name, ColorPair::background(*background))
            })
    }
}

pub static SHELL: StaticSection = StaticSection {
    name: "Shell",
    guid: "73708ded-2d56-4aad-b8eb-73b20d3f4bff",
    colors: &[
        ("AccentFillDefault", "#39404f"),
        ("AccentFillSecondary", "#39404fe5"),
        ("AccentFillTertiary", "#39404fcc"),
        ("SolidBackgroundFillTertiary", "#282c34"),
        ("SolidBackgroundFillQuaternary", "#2e323a"),
        ("TextFillSecondary", "#ffffffcc"),
        ("SystemFillAttention", "#588295"),
        ("SystemFillSolidAttentionBackground", "#2e323a"),
        ("SystemFillSolidNeutralBackground", "#2e323a"),
    ],
};

pub static SHELL_INTERNAL: StaticSection = StaticSection {
    name: "ShellInternal",
    guid: "5af241b7-5627-4d12-bfb1-2b67d11127d7",
    colors: &[
        ("EnvironmentBackground", "#101216"),
        ("EnvironmentBorder", "#39404f"),
        ("EnvironmentBorderInactive", "#39404f"),
        ("EnvironmentIndicator", "#ffffff60"),
        ("EnvironmentLogo", "#80119f"),
        ("EnvironmentLayeredBackground", "#0000004d"),
        ("StatusBarBackgroundFillSolutionLoading", "#0000004d"),
    ],
};

/// All supplemental sections in merge order.
pub static SHELL_SECTIONS: [&StaticSection; 2] = [&SHELL, &SHELL_INTERNAL];

/// Merges the supplemental sections into `sections`.
///
/// A parsed section with the same name is replaced entirely (its position is
/// kept); otherwise the section is appended.
pub fn merge_shell_sections(sections: &mut Sections) {
    for fixed in SHELL_SECTIONS.iter() {
        sections.insert(fixed.name, fixed.to_section());
    }
}
