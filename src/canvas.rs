//! Square RGBA canvas that rendered icons are drawn into.

use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;
use thiserror::Error;

use crate::color::Color;
use crate::error::{Error, Result};

// ============================================================================
// SizePx
// ============================================================================

/// A 2D size in pixel units.
///
/// Displays and parses as `WIDTHxHEIGHT`, the form asset catalog manifests use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

impl fmt::Display for SizePx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Returned when a `WIDTHxHEIGHT` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pixel size {0:?}, expected WIDTHxHEIGHT")]
pub struct ParseSizeError(String);

impl FromStr for SizePx {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseSizeError(s.to_string());
        let (w, h) = s.split_once('x').ok_or_else(err)?;
        let width = w.trim().parse().map_err(|_| err())?;
        let height = h.trim().parse().map_err(|_| err())?;
        Ok(Self::new(width, height))
    }
}

// ============================================================================
// Canvas
// ============================================================================

/// A square bitmap with an alpha channel.
///
/// A fresh canvas is fully transparent. Canvases are produced by
/// [`render()`](crate::render()) and consumed by encoding them to PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Creates a transparent `size` x `size` canvas.
    ///
    /// Fails with [`Error::InvalidSize`] when `size` is zero.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            data: RgbaImage::new(size, size),
        })
    }

    /// Copies a drawing surface into a canvas, undoing premultiplied alpha.
    pub(crate) fn from_pixmap(pixmap: &Pixmap) -> Self {
        let mut data = RgbaImage::new(pixmap.width(), pixmap.height());

        for (dst, src) in data.pixels_mut().zip(pixmap.pixels()) {
            let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
            *dst = Rgba([r, g, b, a]);
        }

        Self { data }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// Returns the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.data.get_pixel_checked(x, y).map(|p| Color::from(*p))
    }

    /// Returns true if no pixel has any coverage.
    pub fn is_blank(&self) -> bool {
        self.data.pixels().all(|p| p[3] == 0)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.data
    }

    pub fn into_image(self) -> RgbaImage {
        self.data
    }

    /// Encodes the canvas as PNG bytes.
    pub fn encode_png(&self) -> std::result::Result<Vec<u8>, image::ImageError> {
        let mut bytes = Vec::new();
        self.data
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encodes the canvas as PNG and writes it to `path`, replacing any
    /// existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png().map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, bytes).map_err(|e| Error::io(path, e))
    }
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
