//! Rasterizes the ghost glyph.
//!
//! All variants go through [`draw_ghost`]; a variant only changes the
//! palette, the head ratio and whether the mouth is drawn.

use log::debug;
use resvg::tiny_skia::{
    FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::canvas::Canvas;
use crate::color::{Color, Palette};
use crate::error::{Error, Result};
use crate::geometry::{Circle, GhostGeometry, MouthArc};
use crate::variant::Variant;

/// Control point distance for approximating a quarter ellipse with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// Draws the ghost for `variant` onto a new transparent `size` x `size`
/// canvas.
///
/// Fails with [`Error::InvalidSize`] for `size == 0`. Very small sizes are
/// valid: shapes whose radius truncates to zero are skipped.
///
/// # Example
///
/// ```
/// use ghost_icons::{render, Variant};
///
/// let canvas = render(64, Variant::Standard).unwrap();
/// assert_eq!(canvas.size(), 64);
/// ```
pub fn render(size: u32, variant: Variant) -> Result<Canvas> {
    if size == 0 {
        return Err(Error::InvalidSize(size));
    }

    let geometry = GhostGeometry::new(size, variant);
    debug!("{variant} {size}px geometry: {geometry:?}");

    let mut pixmap = Pixmap::new(size, size).ok_or(Error::Surface { size })?;
    draw_ghost(&mut pixmap, &geometry, variant.palette());

    Ok(Canvas::from_pixmap(&pixmap))
}

/// Paints body, eyes and (optionally) mouth in that order.
fn draw_ghost(pixmap: &mut Pixmap, geometry: &GhostGeometry, palette: Palette) {
    let body = paint(palette.body);
    let features = paint(palette.features);

    fill_circle(pixmap, &geometry.head, &body);
    for scallop in &geometry.scallops {
        fill_circle(pixmap, scallop, &body);
    }

    for eye in &geometry.eyes {
        fill_circle(pixmap, eye, &features);
    }

    if let Some(mouth) = &geometry.mouth {
        stroke_mouth(pixmap, mouth, &features);
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn fill_circle(pixmap: &mut Pixmap, circle: &Circle, paint: &Paint<'_>) {
    if circle.is_degenerate() {
        debug!("skipping zero-radius circle at ({}, {})", circle.cx, circle.cy);
        return;
    }
    let Some(path) = PathBuilder::from_circle(circle.cx, circle.cy, circle.radius) else {
        return;
    };
    pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
}

fn stroke_mouth(pixmap: &mut Pixmap, mouth: &MouthArc, paint: &Paint<'_>) {
    if mouth.is_degenerate() {
        debug!("skipping zero-size mouth");
        return;
    }
    let Some(path) = lower_half_ellipse(mouth) else {
        return;
    };
    let stroke = Stroke {
        width: mouth.stroke_width,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, paint, &stroke, Transform::identity(), None);
}

/// The 0°..180° sweep of the mouth ellipse, right end to left end through
/// the bottom.
fn lower_half_ellipse(arc: &MouthArc) -> Option<Path> {
    let MouthArc { cx, cy, rx, ry, .. } = *arc;
    let kx = rx * KAPPA;
    let ky = ry * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(cx + rx, cy);
    pb.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
    pb.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{NEUTRAL_GRAY, PRIMARY_GREEN, WHITE};

    #[test]
    fn canvas_matches_requested_size() {
        for size in [1, 16, 64, 1024] {
            let canvas = render(size, Variant::Standard).unwrap();
            assert_eq!(canvas.size(), size);
            assert!(canvas.dimensions().is_square());
        }
    }

    #[test]
    fn center_pixel_is_body_color() {
        let standard = render(1024, Variant::Standard).unwrap();
        assert_eq!(standard.pixel(512, 512), Some(PRIMARY_GREEN));

        let tinted = render(1024, Variant::Tinted).unwrap();
        assert_eq!(tinted.pixel(512, 512), Some(NEUTRAL_GRAY));
    }

    #[test]
    fn background_stays_transparent() {
        let canvas = render(1024, Variant::Standard).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(1023, 1023), Some(Color::TRANSPARENT));
        // below the scallops
        assert_eq!(canvas.pixel(512, 800), Some(Color::TRANSPARENT));
    }

    #[test]
    fn eyes_are_white_in_every_variant() {
        for variant in Variant::ALL {
            let canvas = render(1024, variant).unwrap();
            let geometry = GhostGeometry::new(1024, variant);
            for eye in &geometry.eyes {
                let pixel = canvas.pixel(eye.cx as u32, eye.cy as u32);
                assert_eq!(pixel, Some(WHITE), "{variant} eye");
            }
        }
    }

    #[test]
    fn mouth_only_on_standard_and_dark() {
        let geometry = GhostGeometry::new(1024, Variant::Standard);
        let (x, y) = geometry.mouth.unwrap().bottom();

        let standard = render(1024, Variant::Standard).unwrap();
        assert_eq!(standard.pixel(x as u32, y as u32), Some(WHITE));

        let tinted = render(1024, Variant::Tinted).unwrap();
        assert_eq!(tinted.pixel(x as u32, y as u32), Some(NEUTRAL_GRAY));
    }

    #[test]
    fn scallops_extend_below_head() {
        let canvas = render(1024, Variant::Standard).unwrap();
        let geometry = GhostGeometry::new(1024, Variant::Standard);
        let below_head = (geometry.head.cy + geometry.head.radius + 40.0) as u32;
        assert_eq!(canvas.pixel(512, below_head), Some(PRIMARY_GREEN));
    }

    #[test]
    fn dark_renders_like_standard() {
        let standard = render(128, Variant::Standard).unwrap();
        let dark = render(128, Variant::Dark).unwrap();
        assert_eq!(standard, dark);
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = render(256, Variant::Tinted).unwrap();
        let second = render(256, Variant::Tinted).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_pixel_does_not_panic() {
        for variant in Variant::ALL {
            let canvas = render(1, variant).unwrap();
            assert_eq!(canvas.size(), 1);
        }
    }

    #[test]
    fn zero_size_is_an_error() {
        let err = render(0, Variant::Standard).unwrap_err();
        assert!(matches!(err, Error::InvalidSize(0)));
    }

    #[test]
    fn lower_half_ellipse_spans_mouth_width() {
        let arc = MouthArc {
            cx: 50.0,
            cy: 50.0,
            rx: 10.0,
            ry: 6.0,
            stroke_width: 2.0,
        };
        let path = lower_half_ellipse(&arc).unwrap();
        let bounds = path.bounds();
        assert_eq!(bounds.left(), 40.0);
        assert_eq!(bounds.right(), 60.0);
        assert_eq!(bounds.top(), 50.0);
        assert_eq!(bounds.bottom(), 56.0);
    }
}
