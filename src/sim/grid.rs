//! The fixed brick grid
//!
//! A compile-time arrangement of bricks in rows. Iteration order is
//! declaration order (row-major, top row first, left to right) - the
//! collision tie-break rules depend on it, so it never changes.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::brick::Brick;
use crate::consts::*;

/// The level's brick collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    bricks: Vec<Brick>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Build the full grid at its initial layout
    pub fn new() -> Self {
        let bricks = Self::slots().map(|p| Brick::new(p.x, p.y)).collect();
        Self { bricks }
    }

    /// Layout slot positions in declaration order
    fn slots() -> impl Iterator<Item = IVec2> {
        (0..GRID_ROWS).flat_map(|row| {
            (0..GRID_COLS).map(move |col| {
                IVec2::new(
                    GRID_ORIGIN_X + GRID_STEP_X * col as i32,
                    GRID_ORIGIN_Y + GRID_STEP_Y * row as i32,
                )
            })
        })
    }

    /// Restore every brick to its initial slot for a new session
    pub fn reset(&mut self) {
        for (brick, slot) in self.bricks.iter_mut().zip(Self::slots()) {
            brick.reset(slot.x, slot.y);
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn bricks_mut(&mut self) -> &mut [Brick] {
        &mut self.bricks
    }

    pub fn alive_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let grid = Grid::new();
        assert_eq!(grid.len(), GRID_ROWS * GRID_COLS);
        assert_eq!(grid.bricks()[0].pos, IVec2::new(100, 80));
        assert_eq!(grid.bricks()[7].pos, IVec2::new(555, 80));
        assert_eq!(grid.bricks()[8].pos, IVec2::new(100, 120));
        assert_eq!(grid.bricks()[23].pos, IVec2::new(555, 160));
    }

    #[test]
    fn test_iteration_is_row_major() {
        let grid = Grid::new();
        let mut prev = IVec2::new(i32::MIN, i32::MIN);
        for brick in grid.bricks() {
            assert!(brick.pos.y > prev.y || (brick.pos.y == prev.y && brick.pos.x > prev.x));
            prev = brick.pos;
        }
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut grid = Grid::new();
        for brick in grid.bricks_mut() {
            brick.alive = false;
            brick.scored = true;
            brick.health_points = 0;
            brick.advance();
        }
        assert_eq!(grid.alive_count(), 0);

        grid.reset();
        assert_eq!(grid.alive_count(), grid.len());
        let fresh = Grid::new();
        assert_eq!(grid.bricks(), fresh.bricks());
    }
}
