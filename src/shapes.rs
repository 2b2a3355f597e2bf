use corelib::gfx::Color;
use corelib::math::{IntoVec2, Rect, Vec2, distance};
use draw::Canvas;

/// A circle kept as center + radius with a derived bounding rect.
///
/// Drawing delegates to the rounded-rectangle primitive with the corner
/// radius set to the circle's radius, which degenerates visually to a
/// circle. A `stroke_width` of 0 draws it filled.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Vec2,
    radius: i32,
    diameter: i32,
    color: Color,
    stroke_width: i32,
    rect: Rect,
}

impl Circle {
    pub fn new(center: impl IntoVec2, radius: i32, color: Color) -> Self {
        let center = center.into_vec2();
        let diameter = radius * 2;
        Self {
            center,
            radius,
            diameter,
            color,
            stroke_width: 0,
            rect: bounds(center, diameter),
        }
    }

    /// Draw only the outline with the given thickness
    pub fn with_stroke_width(mut self, width: i32) -> Self {
        self.stroke_width = width;
        self
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Change the radius, recomputing the diameter and the bounding rect
    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
        self.diameter = radius * 2;
        self.rect = bounds(self.center, self.diameter);
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// The `diameter x diameter` rect centered on the circle's center
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let mut rect = canvas.rect(self.rect.origin, self.rect.size);
        rect.corner_radius(self.radius as f32).color(self.color);
        if self.stroke_width > 0 {
            rect.stroke(self.stroke_width as f32);
        }
    }

    /// Whether `point` hits the circle, using the integer-truncated distance
    /// from the center.
    ///
    /// With `only_border` the test passes only inside the drawn ring:
    /// `radius - stroke_width + 1 ..= radius`.
    pub fn collide_point(&self, point: impl IntoVec2, only_border: bool) -> bool {
        let dist = distance(self.center, point) as i32;
        if only_border {
            dist <= self.radius && dist >= self.radius - self.stroke_width + 1
        } else {
            dist <= self.radius
        }
    }
}

fn bounds(center: Vec2, diameter: i32) -> Rect {
    Rect::from_center(center, Vec2::splat(diameter as f32))
}
