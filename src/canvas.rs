//! The draw-call surface and the pixel frame buffer behind it.
//!
//! Renderers paint through the [`Canvas`] trait rather than into raw pixels
//! so the rasterising [`Frame`] can be swapped for a recording double in
//! tests. A frame is acquired once per tick, threaded by exclusive mutable
//! borrow through every draw call in sequence, and then handed to the
//! projection side; it is never aliased.
use glam::IVec2;
use image::{Rgb, RgbImage};

/// Pixel colour, RGB byte order.
pub type Color = Rgb<u8>;

/// Primitive draw operations the renderers are written against.
pub trait Canvas {
    /// Paints a filled disc. A radius of zero paints the centre pixel;
    /// negative radii paint nothing.
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color);

    /// Paints a filled disc alpha-composited over the existing pixels.
    /// `alpha` is the disc's weight in `[0, 1]`; the existing pixel keeps
    /// `1 - alpha`.
    fn blend_circle(&mut self, center: IVec2, radius: i32, color: Color, alpha: f64);

    /// Paints an opaque line of the given pixel thickness between two
    /// points. Coincident endpoints degrade to a single disc.
    fn line(&mut self, from: IVec2, to: IVec2, color: Color, thickness: i32);
}

/// An owned RGB frame buffer.
///
/// Wraps the capture frame the projection loop hands in each tick. All
/// primitives clip against the frame bounds, so entities that have drifted
/// off screen cost nothing and corrupt nothing.
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Creates a black frame of the given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Wraps an existing image, typically the current camera frame.
    #[must_use]
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Releases the underlying image for display or streaming.
    #[must_use]
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Read access to the underlying pixels.
    #[must_use]
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Visits every in-bounds pixel of the disc around `center`.
    fn for_each_disc_pixel(&mut self, center: IVec2, radius: i32, mut visit: impl FnMut(&mut Color)) {
        if radius < 0 {
            return;
        }
        let radius_sq = i64::from(radius) * i64::from(radius);
        for y in clip_span(center.y, radius, self.image.height()) {
            for x in clip_span(center.x, radius, self.image.width()) {
                // Entities can drift arbitrarily far off frame, so keep the
                // coordinate arithmetic in i64.
                let dx = i64::from(x) - i64::from(center.x);
                let dy = i64::from(y) - i64::from(center.y);
                if dx * dx + dy * dy <= radius_sq {
                    visit(self.image.get_pixel_mut(cast_coord(x), cast_coord(y)));
                }
            }
        }
    }
}

impl Canvas for Frame {
    fn fill_circle(&mut self, center: IVec2, radius: i32, color: Color) {
        self.for_each_disc_pixel(center, radius, |pixel| *pixel = color);
    }

    fn blend_circle(&mut self, center: IVec2, radius: i32, color: Color, alpha: f64) {
        self.for_each_disc_pixel(center, radius, |pixel| {
            *pixel = Rgb([
                blend_channel(color.0[0], pixel.0[0], alpha),
                blend_channel(color.0[1], pixel.0[1], alpha),
                blend_channel(color.0[2], pixel.0[2], alpha),
            ]);
        });
    }

    fn line(&mut self, from: IVec2, to: IVec2, color: Color, thickness: i32) {
        let half_width = f64::from(thickness.max(1)) / 2.0;
        let reach = i64::from(thickness / 2 + 1);
        let x_lo = i64::from(from.x.min(to.x)) - reach;
        let x_hi = i64::from(from.x.max(to.x)) + reach;
        let y_lo = i64::from(from.y.min(to.y)) - reach;
        let y_hi = i64::from(from.y.max(to.y)) + reach;
        for y in clip_range(y_lo, y_hi, self.image.height()) {
            for x in clip_range(x_lo, x_hi, self.image.width()) {
                let point = IVec2::new(x, y);
                if point_segment_distance(point, from, to) <= half_width {
                    self.image.put_pixel(cast_coord(x), cast_coord(y), color);
                }
            }
        }
    }
}

/// Weighted average of one channel, saturating into the byte range.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is clamped to the byte range before casting."
)]
fn blend_channel(top: u8, bottom: u8, alpha: f64) -> u8 {
    let mixed = f64::from(top) * alpha + f64::from(bottom) * (1.0 - alpha);
    mixed.round().clamp(0.0, 255.0) as u8
}

/// Distance from `point` to the closed segment `a..b`.
fn point_segment_distance(point: IVec2, a: IVec2, b: IVec2) -> f64 {
    let ab = (b - a).as_dvec2();
    let ap = (point - a).as_dvec2();
    let length_sq = ab.length_squared();
    if length_sq == 0.0 {
        return ap.length();
    }
    let t = (ap.dot(ab) / length_sq).clamp(0.0, 1.0);
    (ap - ab * t).length()
}

/// The in-bounds coordinates within `radius` of `center` along one axis.
fn clip_span(center: i32, radius: i32, limit: u32) -> std::ops::RangeInclusive<i32> {
    let center = i64::from(center);
    let radius = i64::from(radius);
    clip_range(center - radius, center + radius, limit)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Both bounds are clamped into the frame, whose extent fits i32."
)]
fn clip_range(lo: i64, hi: i64, limit: u32) -> std::ops::RangeInclusive<i32> {
    let max = i64::from(limit) - 1;
    if limit == 0 || hi < 0 || lo > max {
        // Entirely off frame; iterates zero times.
        return 1..=0;
    }
    (lo.max(0) as i32)..=(hi.min(max) as i32)
}

/// Converts an already-clipped coordinate to the image index type.
#[expect(
    clippy::cast_sign_loss,
    reason = "Callers only pass coordinates already clipped to frame bounds."
)]
fn cast_coord(value: i32) -> u32 {
    debug_assert!(value >= 0, "coordinate {value} escaped clipping");
    value as u32
}
