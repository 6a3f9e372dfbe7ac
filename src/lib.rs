//! ghost-icons: app icon generator for an iOS asset catalog
//!
//! This crate draws a cartoon ghost out of circles and an arc, in three
//! appearance variants, and writes the PNGs plus the `Contents.json`
//! manifest of an `AppIcon.appiconset` directory.
//!
//! # Example
//!
//! ```
//! use ghost_icons::{render, Variant, PRIMARY_GREEN};
//!
//! let canvas = render(1024, Variant::Standard).unwrap();
//! assert_eq!(canvas.pixel(512, 512), Some(PRIMARY_GREEN));
//! ```
//!
//! # Writing an Icon Set
//!
//! ```no_run
//! use ghost_icons::{CatalogConfig, CatalogWriter};
//!
//! let config = CatalogConfig::new("Assets.xcassets/AppIcon.appiconset");
//! let report = CatalogWriter::new(config).emit_all().unwrap();
//!
//! for path in report.paths() {
//!     println!("{}", path.display());
//! }
//! ```

mod canvas;
mod catalog;
mod color;
mod error;
mod geometry;
mod manifest;
mod render;
mod variant;

pub use canvas::{Canvas, ParseSizeError, SizePx};
pub use catalog::{
    CatalogConfig, CatalogWriter, DEFAULT_ICON_SIZE, DEFAULT_OUTPUT_DIR, EmitReport, emit_all,
};
pub use color::{Color, NEUTRAL_GRAY, PRIMARY_GREEN, Palette, WHITE};
pub use error::{Error, Result};
pub use geometry::{Circle, GhostGeometry, MouthArc};
pub use manifest::{Appearance, MANIFEST_FILE_NAME, Manifest, ManifestEntry, ManifestInfo};
pub use render::render;
pub use variant::Variant;
