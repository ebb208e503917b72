//! Edge-to-edge orthogonal path generation.
//!
//! A path starts at a random position on a random viewport edge, moves inward
//! one cell per step, may turn 90° once a straight run-up has elapsed, and
//! terminates as soon as a step leaves the valid range (clamped back onto the
//! edge for a clean exit). A hard step cap guarantees termination even for
//! pathological turn sequences; hitting it is recorded on the result.

use crate::grid::{GridDims, GridPoint};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Dir {
    /// Unit (col, row) step for this direction. Rows grow downward.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    /// Rotate 90°. Reversal is unrepresentable: a turn is always left or right.
    #[inline]
    pub fn turned(self, turn: Turn) -> Dir {
        match (self, turn) {
            (Dir::Up, Turn::Left) | (Dir::Down, Turn::Right) => Dir::Left,
            (Dir::Up, Turn::Right) | (Dir::Down, Turn::Left) => Dir::Right,
            (Dir::Right, Turn::Left) | (Dir::Left, Turn::Right) => Dir::Up,
            (Dir::Right, Turn::Right) | (Dir::Left, Turn::Left) => Dir::Down,
        }
    }
}

/// When and how often a path may turn.
#[derive(Clone, Copy, Debug)]
pub struct TurnRule {
    pub probability: f32,
    pub min_steps_before_turn: u32,
    pub max_steps: u32,
}

/// Ordered lattice points from one edge to (possibly another) edge.
#[derive(Clone, Debug)]
pub struct GridPath {
    pub points: Vec<GridPoint>,
    /// The safety cap stopped generation before an edge exit.
    pub capped: bool,
}

/// Uniformly random start on one of the four edges, heading inward.
pub fn random_edge_start(dims: &GridDims, rng: &mut impl Rng) -> (GridPoint, Dir) {
    match rng.gen_range(0..4u8) {
        0 => (GridPoint::new(rng.gen_range(0..dims.cols), 0), Dir::Down),
        1 => (
            GridPoint::new(dims.cols - 1, rng.gen_range(0..dims.rows)),
            Dir::Left,
        ),
        2 => (
            GridPoint::new(rng.gen_range(0..dims.cols), dims.rows - 1),
            Dir::Up,
        ),
        _ => (GridPoint::new(0, rng.gen_range(0..dims.rows)), Dir::Right),
    }
}

/// Generate a full edge-to-edge path with random turns.
pub fn generate_path(dims: &GridDims, rule: &TurnRule, rng: &mut impl Rng) -> GridPath {
    let (start, dir) = random_edge_start(dims, rng);
    build_path(dims, start, dir, rule.max_steps, |steps| {
        if steps >= rule.min_steps_before_turn && rng.gen::<f32>() < rule.probability {
            Some(if rng.gen_bool(0.5) {
                Turn::Left
            } else {
                Turn::Right
            })
        } else {
            None
        }
    })
}

/// Walk from `start` heading `dir`, asking `turn_at(steps_taken)` before each
/// step. Exposed separately from [`generate_path`] so the walk itself is
/// deterministic under test.
pub fn build_path(
    dims: &GridDims,
    start: GridPoint,
    dir: Dir,
    max_steps: u32,
    mut turn_at: impl FnMut(u32) -> Option<Turn>,
) -> GridPath {
    let mut points = vec![start];
    let mut dir = dir;
    let (mut col, mut row) = (start.col, start.row);
    let mut steps = 0u32;

    let capped = loop {
        if let Some(turn) = turn_at(steps) {
            dir = dir.turned(turn);
        }
        let (dc, dr) = dir.delta();
        col += dc;
        row += dr;
        steps += 1;

        let next = GridPoint::new(col, row);
        if !dims.contains(next) {
            // Clean exit: clamp onto the nearest in-range edge point. When
            // the previous step already landed on that edge the clamp is a
            // duplicate and is skipped, keeping every segment a real step.
            let exit = dims.clamp(col, row);
            if points.last() != Some(&exit) {
                points.push(exit);
            }
            break false;
        }
        points.push(next);

        if steps >= max_steps {
            break true;
        }
    };

    if capped {
        log::debug!(
            "path generation hit the {max_steps}-step cap at ({col}, {row}) without exiting"
        );
    }
    GridPath { points, capped }
}
