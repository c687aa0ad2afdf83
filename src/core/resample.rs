//! Arc-length resampling of raw pointer paths.
//!
//! A recorded drag is a polyline with an arbitrary number of vertices. The
//! resampler turns it into exactly `count` points spaced evenly by distance
//! travelled, expressed relative to the recording's origin, so every sample
//! in a dataset has the same dimensionality.
//!
//! Degenerate paths (fewer than two points, or no distance travelled) are
//! not errors: they resample to `count` copies of [`Point2D::ZERO`].

use super::geometry::Point2D;

/// Default number of points per resampled trajectory.
pub const DEFAULT_TRAJECTORY_POINTS: usize = 10;

/// Cumulative arc length at each vertex of `path`.
///
/// `dist[0] == 0` and `dist[i] == dist[i - 1] + |path[i] - path[i - 1]|`.
pub fn cumulative_distances(path: &[Point2D]) -> Vec<f64> {
    let mut dist = Vec::with_capacity(path.len());
    let mut total = 0.0;
    for (i, point) in path.iter().enumerate() {
        if i > 0 {
            total += path[i - 1].distance_to(point);
        }
        dist.push(total);
    }
    dist
}

/// `count` arc-length targets evenly spaced over `[0, total]`, both ends included.
fn arc_length_targets(total: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| {
        if i + 1 == count && count > 1 {
            total
        } else if count > 1 {
            total * i as f64 / (count - 1) as f64
        } else {
            0.0
        }
    })
}

/// Resample `path` to exactly `count` points, uniformly spaced by arc length
/// and translated so that `origin` maps to zero.
///
/// Pure and deterministic.
pub fn resample(path: &[Point2D], count: usize, origin: Point2D) -> Vec<Point2D> {
    let dist = cumulative_distances(path);
    let k = path.len();

    let total = match dist.last() {
        Some(&total) if k >= 2 && total > 0.0 => total,
        _ => return vec![Point2D::ZERO; count],
    };

    let mut points = Vec::with_capacity(count);
    let mut j = 0;
    for t in arc_length_targets(total, count) {
        // Targets increase, so the scan pointer never rewinds.
        while j < k - 1 && dist[j + 1] < t {
            j += 1;
        }

        let point = if j == k - 1 {
            path[k - 1]
        } else if t >= dist[j + 1] {
            // Target sits on a vertex; also covers zero-length segments.
            path[j + 1]
        } else {
            let ratio = (t - dist[j]) / (dist[j + 1] - dist[j]);
            path[j].lerp(&path[j + 1], ratio)
        };
        points.push(point - origin);
    }
    points
}
