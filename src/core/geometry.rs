//! Planar geometry shared by the capture session and the resampler.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A planar coordinate in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The origin of the plane.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared Euclidean distance, used for hit tests.
    pub fn distance_squared(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Linear interpolation toward `other`.
    ///
    /// Exact at both ends: `ratio == 0.0` returns `self` and `ratio == 1.0`
    /// returns `other`.
    pub fn lerp(&self, other: &Point2D, ratio: f64) -> Point2D {
        let keep = 1.0 - ratio;
        Point2D {
            x: self.x * keep + other.x * ratio,
            y: self.y * keep + other.y * ratio,
        }
    }

    /// Coordinates rounded half away from zero.
    pub fn rounded(&self) -> [i64; 2] {
        [round_coordinate(self.x), round_coordinate(self.y)]
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rounding rule for every persisted coordinate: nearest integer, ties away
/// from zero. Non-finite values collapse to 0.
pub fn round_coordinate(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Size of the capture canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Canonical origin position.
    pub fn center(&self) -> Point2D {
        Point2D::new((self.width / 2.0).floor(), (self.height / 2.0).floor())
    }

    /// Clamp each axis into `[margin, extent - margin]`.
    pub fn clamp(&self, point: Point2D, margin: f64) -> Point2D {
        Point2D::new(
            point.x.clamp(margin, self.width - margin),
            point.y.clamp(margin, self.height - margin),
        )
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// RGB marker color handed to the display collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Marker palette. The first entry is reserved for the origin marker.
pub const PALETTE: [Color; 5] = [
    Color::rgb(255, 0, 0),
    Color::rgb(0, 200, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 165, 0),
    Color::rgb(200, 0, 200),
];

/// Color of the origin marker.
pub const ORIGIN_COLOR: Color = PALETTE[0];

/// Colors a target marker may take.
pub fn target_colors() -> &'static [Color] {
    &PALETTE[1..]
}

/// A circular marker on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: Point2D,
    pub radius: f64,
    pub color: Color,
}

impl Marker {
    pub fn new(center: Point2D, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// A click at `point` hits iff it lies inside or on the marker's circle.
    pub fn hit(&self, point: &Point2D) -> bool {
        point.distance_squared(&self.center) <= self.radius * self.radius
    }
}
