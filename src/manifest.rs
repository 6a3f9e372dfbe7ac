//! The `Contents.json` manifest of an app icon set.
//!
//! The manifest tells the asset catalog compiler which image to use for each
//! platform appearance. Entries keep the order the images were written in.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "images": [
//!     {
//!       "filename": "AppIcon-1024.png",
//!       "idiom": "universal",
//!       "platform": "ios",
//!       "size": "1024x1024"
//!     },
//!     {
//!       "appearances": [
//!         { "appearance": "luminosity", "value": "dark" }
//!       ],
//!       "filename": "AppIcon-1024-dark.png",
//!       "idiom": "universal",
//!       "platform": "ios",
//!       "size": "1024x1024"
//!     }
//!   ],
//!   "info": {
//!     "author": "xcode",
//!     "version": 1
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::canvas::SizePx;
use crate::variant::Variant;

/// File name of the manifest inside the icon set directory.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

const IDIOM_UNIVERSAL: &str = "universal";
const PLATFORM_IOS: &str = "ios";
const LUMINOSITY: &str = "luminosity";

// ============================================================================
// Appearance
// ============================================================================

/// A condition under which the system picks an image, e.g. luminosity=dark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Appearance {
    /// The trait being matched, e.g. `luminosity`.
    pub appearance: String,
    /// The trait value, e.g. `dark` or `tinted`.
    pub value: String,
}

impl Appearance {
    pub fn new(appearance: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            appearance: appearance.into(),
            value: value.into(),
        }
    }

    /// A luminosity condition.
    pub fn luminosity(value: impl Into<String>) -> Self {
        Self::new(LUMINOSITY, value)
    }
}

// ============================================================================
// ManifestEntry
// ============================================================================

/// One image record of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ManifestEntry {
    /// Appearance conditions. Empty for the default image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub appearances: Vec<Appearance>,

    pub filename: String,
    pub idiom: String,
    pub platform: String,

    /// Pixel size as `WIDTHxHEIGHT`.
    pub size: String,
}

impl ManifestEntry {
    /// Creates a universal iOS entry with no appearance condition.
    pub fn universal(filename: impl Into<String>, size: SizePx) -> Self {
        Self {
            appearances: Vec::new(),
            filename: filename.into(),
            idiom: IDIOM_UNIVERSAL.to_string(),
            platform: PLATFORM_IOS.to_string(),
            size: size.to_string(),
        }
    }

    /// Adds an appearance condition.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearances.push(appearance);
        self
    }

    /// The entry a variant's image is listed under.
    pub fn for_variant(variant: Variant, size: u32) -> Self {
        let entry = Self::universal(variant.file_name(size), SizePx::square(size));
        match variant.appearance() {
            Some(appearance) => entry.with_appearance(appearance),
            None => entry,
        }
    }

    /// The single appearance condition, if exactly one is present.
    pub fn appearance(&self) -> Option<&Appearance> {
        match self.appearances.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Parses the `size` field. Returns `None` for fractional sizes such as
    /// `83.5x83.5`.
    pub fn dimensions(&self) -> Option<SizePx> {
        self.size.parse().ok()
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Metadata block identifying the tool and format version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// The complete `Contents.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    #[serde(default)]
    pub info: ManifestInfo,
}

impl Manifest {
    /// Creates an empty manifest with the default info block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn with_entry(mut self, entry: ManifestEntry) -> Self {
        self.images.push(entry);
        self
    }

    /// Builds the manifest listing one image per variant, in the given order.
    pub fn for_variants(variants: &[Variant], size: u32) -> Self {
        variants
            .iter()
            .fold(Self::new(), |manifest, &variant| {
                manifest.with_entry(ManifestEntry::for_variant(variant, size))
            })
    }

    /// Returns the entry for the given file name.
    pub fn entry(&self, filename: &str) -> Option<&ManifestEntry> {
        self.images.iter().find(|e| e.filename == filename)
    }

    /// Serializes the manifest to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the manifest to a pretty-printed JSON string with two-space
    /// indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================
