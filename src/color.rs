//! Colors and the fixed palettes used by the icon variants.

use image::Rgba;
use resvg::tiny_skia;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a color from its four components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Fully transparent black, the initial value of every canvas pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub fn as_tuple(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Returns `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

/// Brand green (`#33B34D`) used for the ghost body.
pub const PRIMARY_GREEN: Color = Color::opaque(51, 179, 77);

/// Eyes and mouth.
pub const WHITE: Color = Color::opaque(255, 255, 255);

/// Single tone used by the tinted variant's body.
pub const NEUTRAL_GRAY: Color = Color::opaque(100, 100, 100);

/// The pair of colors a variant draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Head and scalloped base.
    pub body: Color,
    /// Eyes and mouth.
    pub features: Color,
}

impl Palette {
    pub const fn new(body: Color, features: Color) -> Self {
        Self { body, features }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_green_hex() {
        assert_eq!(PRIMARY_GREEN.to_hex(), "#33b34d");
        assert_eq!(PRIMARY_GREEN.a, 255);
    }

    #[test]
    fn rgba_conversion_preserves_components() {
        let color = Color::new(1, 2, 3, 4);
        let pixel: Rgba<u8> = color.into();
        assert_eq!(pixel.0, [1, 2, 3, 4]);
        assert_eq!(Color::from(pixel), color);
    }

    #[test]
    fn transparent_is_all_zero() {
        assert_eq!(Color::TRANSPARENT.as_tuple(), (0, 0, 0, 0));
    }
}
