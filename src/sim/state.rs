//! Game state and core simulation types
//!
//! Everything the state machine owns for one play session lives here:
//! the mode enum, the paddle, the ball and the aggregate `GameState`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::rect::Rect;
use crate::consts::*;
use crate::platform::{Event, Key};

/// Current game mode; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for a new game
    Menu,
    /// Active gameplay
    Play,
    /// Ball was lost; shows the final score
    Score,
    /// Every brick destroyed
    Win,
    /// Quit requested; halts the outer loop
    Exit,
}

/// Notifications emitted by the simulation for one frame.
///
/// The session maps these to audio triggers; the simulation itself
/// never talks to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball deflected off a screen edge
    WallBounce,
    /// Ball deflected off the paddle
    PaddleBounce,
    /// Ball deflected off a brick
    BrickHit,
    /// A brick's score was awarded
    BrickDestroyed,
    /// Ball crossed the bottom boundary
    BallLost,
    /// Score threshold reached
    Won,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
    /// Displacement applied per frame while direction keys are held.
    /// The y component is tracked by Up/Down but never moves the
    /// paddle; only x feeds `advance`.
    pub vel: IVec2,
    pub score: u32,
    pub lives: u32,
    pub health_points: u32,
    /// Sub-colliders, re-derived from `pos` every frame
    pub collider_left: Rect,
    pub collider_mid: Rect,
    pub collider_right: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    pub fn new() -> Self {
        let pos = IVec2::new(
            SCREEN_WIDTH / 2 - PADDLE_WIDTH / 2,
            SCREEN_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
        );
        let s = PADDLE_COLLIDER_SIZE;
        Self {
            pos,
            vel: IVec2::ZERO,
            score: 0,
            lives: 3,
            health_points: 1,
            collider_left: Rect::new(pos.x, pos.y, s, s),
            collider_mid: Rect::new(pos.x + s, pos.y, s, s),
            collider_right: Rect::new(pos.x + 2 * s, pos.y, s, s),
        }
    }

    /// Adjust velocity from a key event.
    ///
    /// Key-down adds the speed increment, the matching key-up subtracts
    /// it back, so velocity is nonzero only while a key is held and
    /// opposite keys cancel. Repeat events are ignored; honoring them
    /// would stack the increment once per OS repeat.
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::KeyDown { key, repeat: false } => match key {
                Key::Up => self.vel.y -= PADDLE_SPEED,
                Key::Down => self.vel.y += PADDLE_SPEED,
                Key::Left => self.vel.x -= PADDLE_SPEED,
                Key::Right => self.vel.x += PADDLE_SPEED,
                _ => {}
            },
            Event::KeyUp { key, repeat: false } => match key {
                Key::Up => self.vel.y += PADDLE_SPEED,
                Key::Down => self.vel.y -= PADDLE_SPEED,
                Key::Left => self.vel.x += PADDLE_SPEED,
                Key::Right => self.vel.x -= PADDLE_SPEED,
                _ => {}
            },
            _ => {}
        }
    }

    /// Advance one frame: refresh the sub-colliders from the current
    /// position, then apply the horizontal velocity. A displacement
    /// that would push any part of the paddle off screen is reverted
    /// whole, so the paddle holds its previous position for the frame.
    pub fn advance(&mut self) {
        let s = PADDLE_COLLIDER_SIZE;
        self.collider_left.place(self.pos);
        self.collider_mid.place(self.pos + IVec2::new(s, 0));
        self.collider_right.place(self.pos + IVec2::new(2 * s, 0));

        self.pos.x += self.vel.x;
        if self.pos.x < 0 || self.pos.x + PADDLE_WIDTH > SCREEN_WIDTH {
            self.pos.x -= self.vel.x;
        }
    }

    /// Full paddle bounds (for rendering)
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, PADDLE_WIDTH, PADDLE_HEIGHT)
    }
}

/// The ball: a fixed-size box with an axis-quantized direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    /// Per-axis components are always -BALL_SPEED, 0, or +BALL_SPEED;
    /// deflections flip signs, never change the magnitude
    pub dir: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: IVec2::new(SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2),
            dir: IVec2::splat(BALL_SPEED),
        }
    }

    /// Back to screen center with the launch direction
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Move one frame along the direction vector
    pub fn advance(&mut self) {
        self.pos += self.dir;
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.pos, BALL_SIZE, BALL_SIZE)
    }
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub mode: GameMode,
    pub paddle: Paddle,
    pub ball: Ball,
    pub grid: Grid,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
            paddle: Paddle::new(),
            ball: Ball::new(),
            grid: Grid::new(),
        }
    }

    /// Begin a fresh play session: zero the score, recenter the ball
    /// and restore every brick to its layout slot.
    pub fn start_play(&mut self) {
        self.paddle.score = 0;
        self.ball.reset();
        self.grid.reset();
        self.mode = GameMode::Play;
    }
}
