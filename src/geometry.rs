//! Canvas coordinate primitives.
//!
//! All coordinates are unscaled canvas units: pointer deltas map 1:1 onto
//! node positions and sizes.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            x,
            y,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(
        self,
        rhs: Point,
    ) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(
        self,
        rhs: Point,
    ) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            width,
            height,
        }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Midpoint of the bottom side.
    pub fn bottom_center(&self) -> Point {
        Point::new(self.origin.x + self.size.width / 2.0, self.bottom())
    }

    /// Midpoint of the top side.
    pub fn top_center(&self) -> Point {
        Point::new(self.origin.x + self.size.width / 2.0, self.origin.y)
    }

    pub fn contains(
        &self,
        p: Point,
    ) -> bool {
        p.x >= self.origin.x && p.x <= self.origin.x + self.size.width && p.y >= self.origin.y && p.y <= self.bottom()
    }
}
