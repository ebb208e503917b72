//! Distance-parameterized traversal of a grid path.
//!
//! A signal converts lattice coordinates to pixel points once, precomputes
//! cumulative segment lengths (Manhattan per segment, since every segment is
//! axis-aligned), and from then on is addressed purely by distance traveled.

use crate::grid::GridDims;
use crate::path::GridPath;
use glam::Vec2;
use smallvec::SmallVec;

/// Short polyline buffer; trails rarely span more than a handful of corners.
pub type Polyline = SmallVec<[Vec2; 8]>;

#[derive(Clone, Debug)]
pub struct Signal {
    points: Vec<Vec2>,
    /// `cumulative[i]` is the distance from the path start to `points[i]`.
    cumulative: Vec<f32>,
    total_len: f32,
    /// Pixel distance the head has traveled since creation.
    pub progress: f32,
}

impl Signal {
    pub fn from_path(path: &GridPath, dims: &GridDims) -> Self {
        debug_assert!(path.points.len() >= 2, "a path always has two or more points");
        let points: Vec<Vec2> = path.points.iter().map(|&p| dims.to_px(p)).collect();
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in points.windows(2) {
            total += (pair[1].x - pair[0].x).abs() + (pair[1].y - pair[0].y).abs();
            cumulative.push(total);
        }
        Self {
            points,
            cumulative,
            total_len: total,
            progress: 0.0,
        }
    }

    #[inline]
    pub fn total_len(&self) -> f32 {
        self.total_len
    }

    #[inline]
    pub fn advance(&mut self, distance: f32) {
        self.progress += distance;
    }

    /// The head plus its whole trail have left the path.
    #[inline]
    pub fn is_expired(&self, trail_len: f32) -> bool {
        self.progress > self.total_len + trail_len
    }

    /// Interpolated pixel position at a given distance from the path start.
    /// Out-of-range distances clamp to the endpoints rather than erroring.
    pub fn position_at(&self, distance: f32) -> Vec2 {
        if distance <= 0.0 {
            return self.points[0];
        }
        if distance >= self.total_len {
            return *self.points.last().expect("signal has points");
        }
        // Find the segment containing `distance` and lerp within it.
        for i in 1..self.points.len() {
            if self.cumulative[i] >= distance {
                let seg_len = self.cumulative[i] - self.cumulative[i - 1];
                let t = (distance - self.cumulative[i - 1]) / seg_len;
                return self.points[i - 1].lerp(self.points[i], t);
            }
        }
        *self.points.last().expect("signal has points")
    }

    /// Materialize the visible trail as a polyline between
    /// `progress - trail_len` and `progress`, clipped to `[0, total_len]`.
    /// Empty when nothing of the trail is on the path yet.
    pub fn trail(&self, trail_len: f32) -> Polyline {
        let start = (self.progress - trail_len).max(0.0);
        let end = self.progress.min(self.total_len);
        let mut out = Polyline::new();
        if start >= end {
            return out;
        }
        out.push(self.position_at(start));
        for i in 1..self.points.len() - 1 {
            let d = self.cumulative[i];
            if d > start && d < end {
                out.push(self.points[i]);
            }
        }
        out.push(self.position_at(end));
        out
    }
}
