pub use glam::*;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let origin = center - size * 0.5;
        Self { origin, size }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.origin;
        let max = self.origin + self.size;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.origin.y
    }
}

/// Euclidean distance between two positions
#[inline]
pub fn distance(from: impl IntoVec2, to: impl IntoVec2) -> f32 {
    from.into_vec2().distance(to.into_vec2())
}

pub trait IntoVec2 {
    fn into_vec2(self) -> Vec2;
}

impl IntoVec2 for Vec2 {
    #[inline(always)]
    fn into_vec2(self) -> Vec2 {
        self
    }
}
impl IntoVec2 for (f32, f32) {
    #[inline(always)]
    fn into_vec2(self) -> Vec2 {
        self.into()
    }
}
impl IntoVec2 for [f32; 2] {
    #[inline(always)]
    fn into_vec2(self) -> Vec2 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));

        // Point inside the rectangle
        assert!(rect.contains(Vec2::new(5.0, 5.0)));

        // Point on the edge of the rectangle
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));

        // Point outside the rectangle
        assert!(!rect.contains(Vec2::new(-1.0, 5.0)));
        assert!(!rect.contains(Vec2::new(11.0, 5.0)));
    }

    #[test]
    fn test_from_center() {
        let rect = Rect::from_center(Vec2::new(5.0, 5.0), Vec2::new(4.0, 4.0));
        assert_eq!(rect.origin, Vec2::new(3.0, 3.0));
        assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)), 0.0);
        assert_eq!(distance([0.0, 0.0], Vec2::new(0.0, 2.0)), 2.0);
    }

    #[test]
    fn test_into_vec2_from_tuple() {
        let v = (3.0, 4.0).into_vec2();
        assert_eq!(v, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_into_vec2_from_array() {
        let v = [5.0, 6.0].into_vec2();
        assert_eq!(v, Vec2::new(5.0, 6.0));
    }
}
