//! Geometric primitives: Point, Size, Rect

use std::ops::{Add, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns a copy with the horizontal origin replaced. The vertical
    /// origin and the size are untouched.
    pub fn with_x(&self, x: f32) -> Self {
        Self { x, ..*self }
    }

    /// Returns a copy with the vertical origin replaced. The horizontal
    /// origin and the size are untouched.
    pub fn with_y(&self, y: f32) -> Self {
        Self { y, ..*self }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let delta = Point::new(3.0, -2.0) - Point::new(1.0, 1.0);
        assert_eq!(delta, Point::new(2.0, -3.0));
        assert_eq!(delta + Point::new(1.0, 3.0), Point::new(3.0, 0.0));
    }

    #[test]
    fn with_x_preserves_everything_else() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);
        let moved = rect.with_x(-40.0);
        assert_eq!(moved, Rect::new(-40.0, 20.0, 100.0, 200.0));
    }

    #[test]
    fn with_y_preserves_everything_else() {
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);
        let moved = rect.with_y(75.0);
        assert_eq!(moved, Rect::new(10.0, 75.0, 100.0, 200.0));
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(10.0, 10.0));
        assert!(!rect.contains(10.1, 5.0));
    }
}
