//! Writes rendered icons and their manifest into an app icon set directory.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::{Error, Result};
use crate::manifest::{MANIFEST_FILE_NAME, Manifest};
use crate::render::render;
use crate::variant::Variant;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "Assets.xcassets/AppIcon.appiconset";

/// Default side length of the rendered icons.
pub const DEFAULT_ICON_SIZE: u32 = 1024;

// ============================================================================
// CatalogConfig
// ============================================================================

/// Where and at which size the icon set is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// The `.appiconset` directory. Created if missing.
    pub output_dir: PathBuf,
    /// Side length of every rendered image.
    pub size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            size: DEFAULT_ICON_SIZE,
        }
    }
}

impl CatalogConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the icon size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }
}

// ============================================================================
// EmitReport
// ============================================================================

/// Files written by a full run, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    /// One path per variant image.
    pub images: Vec<(Variant, PathBuf)>,
    pub manifest_path: PathBuf,
    /// The manifest as written.
    pub manifest: Manifest,
}

impl EmitReport {
    /// All written paths, images first.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.images
            .iter()
            .map(|(_, path)| path.as_path())
            .chain(std::iter::once(self.manifest_path.as_path()))
    }
}

// ============================================================================
// CatalogWriter
// ============================================================================

/// Renders every [`Variant`] and writes the icon set.
///
/// [`emit_all`](Self::emit_all) runs the whole pipeline. The individual steps
/// are public so a caller can report progress between them.
///
/// Nothing is cleaned up on failure: files written before the error stay on
/// disk.
#[derive(Debug, Clone)]
pub struct CatalogWriter {
    config: CatalogConfig,
}

impl CatalogWriter {
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Creates the output directory and any missing parents.
    pub fn prepare(&self) -> Result<()> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
    }

    /// Path a variant's image is written to.
    pub fn image_path(&self, variant: Variant) -> PathBuf {
        self.config
            .output_dir
            .join(variant.file_name(self.config.size))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.config.output_dir.join(MANIFEST_FILE_NAME)
    }

    /// Renders one variant and writes it as PNG, replacing any existing file.
    pub fn write_variant(&self, variant: Variant) -> Result<PathBuf> {
        let canvas = render(self.config.size, variant)?;
        let path = self.image_path(variant);
        canvas.save_png(&path)?;
        info!("wrote {variant} icon to {}", path.display());
        Ok(path)
    }

    /// The manifest describing the given variants.
    pub fn manifest(&self, variants: &[Variant]) -> Manifest {
        Manifest::for_variants(variants, self.config.size)
    }

    /// Serializes the manifest for `variants` and overwrites `Contents.json`.
    pub fn write_manifest(&self, variants: &[Variant]) -> Result<(PathBuf, Manifest)> {
        let manifest = self.manifest(variants);
        let mut json = manifest.to_json_pretty()?;
        json.push('\n');

        let path = self.manifest_path();
        fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
        info!(
            "wrote manifest with {} entries to {}",
            manifest.images.len(),
            path.display()
        );
        Ok((path, manifest))
    }

    /// Writes every variant image followed by the manifest.
    pub fn emit_all(&self) -> Result<EmitReport> {
        self.prepare()?;

        let mut images = Vec::with_capacity(Variant::ALL.len());
        for variant in Variant::ALL {
            images.push((variant, self.write_variant(variant)?));
        }

        let (manifest_path, manifest) = self.write_manifest(&Variant::ALL)?;

        Ok(EmitReport {
            images,
            manifest_path,
            manifest,
        })
    }
}

/// Writes the default 1024px icon set into `output_dir`.
///
/// ```no_run
/// let report = ghost_icons::emit_all("Assets.xcassets/AppIcon.appiconset").unwrap();
/// assert_eq!(report.manifest.images.len(), 3);
/// ```
pub fn emit_all(output_dir: impl Into<PathBuf>) -> Result<EmitReport> {
    CatalogWriter::new(CatalogConfig::new(output_dir)).emit_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "ghost-icons-catalog-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.size, 1024);
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));

        let custom = CatalogConfig::new("out").with_size(64);
        assert_eq!(custom.size, 64);
        assert_eq!(custom.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn paths_follow_config() {
        let writer = CatalogWriter::new(CatalogConfig::new("icons").with_size(512));
        assert_eq!(
            writer.image_path(Variant::Dark),
            Path::new("icons").join("AppIcon-512-dark.png")
        );
        assert_eq!(writer.manifest_path(), Path::new("icons").join("Contents.json"));
    }

    #[test]
    fn prepare_creates_nested_dirs_and_is_idempotent() {
        let root = scratch_dir("prepare");
        let writer = CatalogWriter::new(CatalogConfig::new(root.join("a/b/c")));

        writer.prepare().unwrap();
        writer.prepare().unwrap();
        assert!(root.join("a/b/c").is_dir());

        fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn emit_all_reports_every_file() {
        let dir = scratch_dir("report");
        let report = CatalogWriter::new(CatalogConfig::new(&dir).with_size(32))
            .emit_all()
            .unwrap();

        assert_eq!(report.images.len(), 3);
        assert_eq!(report.paths().count(), 4);
        for path in report.paths() {
            assert!(path.is_file(), "{} should exist", path.display());
        }
        assert_eq!(report.manifest.images[0].size, "32x32");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn zero_size_fails_before_writing_images() {
        let dir = scratch_dir("zero");
        let err = CatalogWriter::new(CatalogConfig::new(&dir).with_size(0))
            .emit_all()
            .unwrap_err();

        assert!(matches!(err, Error::InvalidSize(0)));
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_output_dir_is_an_io_error() {
        let root = scratch_dir("blocked");
        fs::create_dir_all(&root).unwrap();
        let blocker = root.join("file");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = emit_all(blocker.join("icons")).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, blocker.join("icons")),
            other => panic!("expected an I/O error, got {other:?}"),
        }

        fs::remove_dir_all(&root).unwrap();
    }
}
