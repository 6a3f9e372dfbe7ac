//! The three appearance variants of the app icon.

use std::fmt;

use crate::color::{NEUTRAL_GRAY, PRIMARY_GREEN, Palette, WHITE};
use crate::manifest::Appearance;

/// Which appearance of the icon to draw.
///
/// Standard and dark currently render identically; they stay separate so the
/// dark palette can change without touching the catalog layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Default (light) appearance.
    Standard,
    /// Dark mode appearance.
    Dark,
    /// Single-tone appearance that the system tints.
    Tinted,
}

impl Variant {
    /// All variants in catalog order.
    pub const ALL: [Variant; 3] = [Variant::Standard, Variant::Dark, Variant::Tinted];

    /// Colors for the body and facial features.
    pub fn palette(self) -> Palette {
        match self {
            Self::Standard | Self::Dark => Palette::new(PRIMARY_GREEN, WHITE),
            Self::Tinted => Palette::new(NEUTRAL_GRAY, WHITE),
        }
    }

    /// Head radius as a fraction of the canvas size.
    pub fn head_ratio(self) -> f64 {
        match self {
            Self::Standard | Self::Dark => 0.25,
            Self::Tinted => 0.30,
        }
    }

    /// Whether the mouth arc is drawn.
    pub fn has_mouth(self) -> bool {
        !matches!(self, Self::Tinted)
    }

    /// The appearance condition the catalog tags this variant with.
    pub fn appearance(self) -> Option<Appearance> {
        match self {
            Self::Standard => None,
            Self::Dark => Some(Appearance::luminosity("dark")),
            Self::Tinted => Some(Appearance::luminosity("tinted")),
        }
    }

    /// File name inside the asset catalog, e.g. `AppIcon-1024-dark.png`.
    pub fn file_name(self, size: u32) -> String {
        match self {
            Self::Standard => format!("AppIcon-{size}.png"),
            Self::Dark => format!("AppIcon-{size}-dark.png"),
            Self::Tinted => format!("AppIcon-{size}-tinted.png"),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Standard => "standard",
            Self::Dark => "dark",
            Self::Tinted => "tinted",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_size() {
        assert_eq!(Variant::Standard.file_name(1024), "AppIcon-1024.png");
        assert_eq!(Variant::Dark.file_name(1024), "AppIcon-1024-dark.png");
        assert_eq!(Variant::Tinted.file_name(512), "AppIcon-512-tinted.png");
    }

    #[test]
    fn only_standard_is_untagged() {
        assert!(Variant::Standard.appearance().is_none());
        assert_eq!(
            Variant::Dark.appearance(),
            Some(Appearance::luminosity("dark"))
        );
        assert_eq!(
            Variant::Tinted.appearance(),
            Some(Appearance::luminosity("tinted"))
        );
    }

    #[test]
    fn tinted_is_single_tone_without_mouth() {
        assert_eq!(Variant::Tinted.palette().body, NEUTRAL_GRAY);
        assert!(!Variant::Tinted.has_mouth());
        assert!(Variant::Standard.has_mouth());
        assert_eq!(Variant::Standard.palette(), Variant::Dark.palette());
    }
}
