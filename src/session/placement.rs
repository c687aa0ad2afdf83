//! Target placement.
//!
//! Most targets land close to the origin so the dataset is rich in short
//! corrective moves; the rest are scattered over the whole canvas. All
//! randomness flows through [`RandomSource`] so a seeded source reproduces a
//! session exactly.

use crate::core::{target_colors, Color, Extent, Point2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Source of uniform randomness for placement.
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// A uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_f64() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }

    /// A uniform value in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

/// Replays a fixed list of values in `[0, 1)`, wrapping around at the end.
///
/// Useful for scripted sessions and tests where each draw must be known.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// An empty sequence yields `0.0` forever.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Which branch of the policy produced a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementKind {
    Near,
    Far,
}

/// A placed target before and after clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub kind: PlacementKind,
    pub candidate: Point2D,
    pub position: Point2D,
    pub color: Color,
}

/// Parameters of the near/far placement policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPolicy {
    /// Probability of a near placement.
    pub near_probability: f64,
    /// Smallest near offset from the origin, in pixels.
    pub near_radius_min: f64,
    /// Largest near offset from the origin, in pixels.
    pub near_radius_max: f64,
    /// Minimum distance between a target and the canvas edge.
    pub margin: f64,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            near_probability: 0.7,
            near_radius_min: 20.0,
            near_radius_max: 150.0,
            margin: 50.0,
        }
    }
}

impl PlacementPolicy {
    /// Place a target for an attempt starting at `origin`.
    ///
    /// Draw order: branch choice, then two coordinates (angle and radius
    /// for near, x and y for far), then the marker color.
    pub fn place<R: RandomSource + ?Sized>(
        &self,
        origin: Point2D,
        canvas: &Extent,
        random: &mut R,
    ) -> Placement {
        let (kind, candidate) = if random.next_f64() < self.near_probability {
            let angle = random.uniform(0.0, TAU);
            let radius = random.uniform(self.near_radius_min, self.near_radius_max);
            (
                PlacementKind::Near,
                Point2D::new(
                    origin.x + radius * angle.cos(),
                    origin.y + radius * angle.sin(),
                ),
            )
        } else {
            (
                PlacementKind::Far,
                Point2D::new(
                    random.uniform(0.0, canvas.width),
                    random.uniform(0.0, canvas.height),
                ),
            )
        };

        let colors = target_colors();
        let color = colors[random.next_index(colors.len())];

        Placement {
            kind,
            candidate,
            position: self.clamp(candidate, canvas),
            color,
        }
    }

    /// Keep a candidate `margin` pixels inside every canvas edge.
    pub fn clamp(&self, candidate: Point2D, canvas: &Extent) -> Point2D {
        canvas.clamp(candidate, self.margin)
    }
}
