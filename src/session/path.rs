//! Raw pointer path buffered during a recording.

use crate::core::Point2D;

/// Time-ordered pointer samples of the active recording.
///
/// The buffer is emptied when an attempt is armed, committed, undone or
/// abandoned, so it only ever holds the current attempt.
#[derive(Clone, Debug, Default)]
pub struct PathBuffer {
    points: Vec<Point2D>,
}

impl PathBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Take the buffered path, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<Point2D> {
        std::mem::take(&mut self.points)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_freezes_and_clears() {
        let mut buffer = PathBuffer::new();
        buffer.push(Point2D::new(1.0, 2.0));
        buffer.push(Point2D::new(3.0, 4.0));
        assert_eq!(buffer.len(), 2);

        let frozen = buffer.take();
        assert_eq!(frozen, vec![Point2D::new(1.0, 2.0), Point2D::new(3.0, 4.0)]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn reset_discards_samples() {
        let mut buffer = PathBuffer::new();
        buffer.push(Point2D::ZERO);
        buffer.reset();
        assert!(buffer.points().is_empty());
    }
}
