//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! frame-deterministic:
//! - Integer pixel arithmetic only, one update per frame
//! - Stable iteration order (grid declaration order)
//! - No rendering or platform dependencies beyond the input event data

pub mod brick;
pub mod collision;
pub mod grid;
pub mod rect;
pub mod state;
pub mod tick;

pub use brick::{Brick, BrickVerdict};
pub use collision::{BrickDecision, WallOutcome, resolve_brick, resolve_paddle, resolve_walls};
pub use grid::Grid;
pub use rect::{Rect, overlaps};
pub use state::{Ball, GameEvent, GameMode, GameState, Paddle};
pub use tick::tick;
