//! Ghost layout computed from the canvas size.
//!
//! Every measurement is a fraction of the canvas side, truncated to whole
//! pixels, so the figure scales with the canvas. Positions are in canvas
//! coordinates with the origin at the top-left corner and `y` growing downward.

use crate::variant::Variant;

const SCALLOP_RATIO: f64 = 0.08;
const EYE_RATIO: f64 = 0.04;
const EYE_SPACING_RATIO: f64 = 0.08;
const FEATURE_OFFSET_RATIO: f64 = 0.05;
const MOUTH_WIDTH_RATIO: f64 = 0.1;
const MOUTH_HEIGHT_RATIO: f64 = 0.06;
const MOUTH_STROKE_RATIO: f64 = 0.015;

const MIN_EYE_RADIUS: u32 = 3;
const MIN_MOUTH_STROKE: u32 = 2;

/// Horizontal offsets of the three scallops, in scallop radii.
const SCALLOP_OFFSETS: [f32; 3] = [-1.5, 0.0, 1.5];

/// A filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
}

impl Circle {
    pub fn new(cx: f32, cy: f32, radius: f32) -> Self {
        Self { cx, cy, radius }
    }

    /// Returns true if the point lies inside or on the circle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.cx;
        let dy = y - self.cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Returns true if the radius truncated to zero.
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

/// The lower half of an ellipse, stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouthArc {
    pub cx: f32,
    pub cy: f32,
    /// Horizontal radius.
    pub rx: f32,
    /// Vertical radius.
    pub ry: f32,
    pub stroke_width: f32,
}

impl MouthArc {
    pub fn is_degenerate(&self) -> bool {
        self.rx <= 0.0 || self.ry <= 0.0
    }

    /// The lowest point of the arc, where it crosses the centerline.
    pub fn bottom(&self) -> (f32, f32) {
        (self.cx, self.cy + self.ry)
    }
}

/// All shapes of the ghost for one canvas size and variant.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostGeometry {
    /// Canvas side length in pixels.
    pub size: u32,
    pub head: Circle,
    pub scallops: [Circle; 3],
    pub eyes: [Circle; 2],
    /// Absent for variants without a mouth.
    pub mouth: Option<MouthArc>,
}

impl GhostGeometry {
    /// Lays out the ghost for a `size` x `size` canvas.
    ///
    /// The head sits so that the reserved figure height (see
    /// [`figure_height`](Self::figure_height)) starts half of it above the
    /// canvas center; the scallops hang off the head's bottom edge.
    pub fn new(size: u32, variant: Variant) -> Self {
        let center_x = size as f32 / 2.0;
        let center_y = size as f32 / 2.0;

        let head_radius = fraction(size, variant.head_ratio());
        let scallop_radius = fraction(size, SCALLOP_RATIO);

        let total_height = head_radius * 2.0 + scallop_radius * 2.0;
        let top = center_y - total_height / 2.0 + head_radius;

        let head = Circle::new(center_x, top, head_radius);

        let scallop_y = top + head_radius;
        let scallops = SCALLOP_OFFSETS.map(|offset| {
            Circle::new(center_x + offset * scallop_radius, scallop_y, scallop_radius)
        });

        let eye_radius = fraction(size, EYE_RATIO).max(MIN_EYE_RADIUS as f32);
        let eye_y = top - fraction(size, FEATURE_OFFSET_RATIO);
        let eye_spacing = fraction(size, EYE_SPACING_RATIO);
        let eyes = [
            Circle::new(center_x - eye_spacing, eye_y, eye_radius),
            Circle::new(center_x + eye_spacing, eye_y, eye_radius),
        ];

        let mouth = variant.has_mouth().then(|| MouthArc {
            cx: center_x,
            cy: top + fraction(size, FEATURE_OFFSET_RATIO),
            rx: fraction(size, MOUTH_WIDTH_RATIO),
            ry: fraction(size, MOUTH_HEIGHT_RATIO),
            stroke_width: fraction(size, MOUTH_STROKE_RATIO).max(MIN_MOUTH_STROKE as f32),
        });

        Self {
            size,
            head,
            scallops,
            eyes,
            mouth,
        }
    }

    /// Height reserved for the figure: head diameter plus scallop diameter.
    pub fn figure_height(&self) -> f32 {
        self.head.radius * 2.0 + self.scallops[1].radius * 2.0
    }

    /// Returns true if the point is covered by the head or a scallop.
    pub fn body_contains(&self, x: f32, y: f32) -> bool {
        self.head.contains(x, y) || self.scallops.iter().any(|s| s.contains(x, y))
    }
}

/// `floor(size * ratio)` as a pixel measurement.
fn fraction(size: u32, ratio: f64) -> f32 {
    (size as f64 * ratio).floor() as f32
}
