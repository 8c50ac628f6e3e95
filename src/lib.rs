//! Brick Breaker - a classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, collisions, game state)
//! - `session`: Game-mode state machine driving one inner loop per mode
//! - `platform`: Rendering/input/audio collaborator seam
//! - `ui`: HUD and banner text with cached textures
//! - `audio`: Sound/music trigger routing with graceful degradation

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::HighScores;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Paddle defaults - centered near the bottom of the play field
    pub const PADDLE_WIDTH: i32 = 80;
    pub const PADDLE_HEIGHT: i32 = 40;
    /// Gap between the paddle and the bottom edge
    pub const PADDLE_BOTTOM_MARGIN: i32 = 20;
    /// Velocity added per held direction key (pixels/frame)
    pub const PADDLE_SPEED: i32 = 9;
    /// Side length of each of the paddle's three square sub-colliders
    pub const PADDLE_COLLIDER_SIZE: i32 = 26;

    /// Brick dimensions
    pub const BRICK_WIDTH: i32 = 50;
    pub const BRICK_HEIGHT: i32 = 25;
    /// Points awarded per destroyed brick
    pub const BRICK_SCORE: u32 = 100;

    /// Ball bounding box (square)
    pub const BALL_SIZE: i32 = 20;
    /// Per-axis speed magnitude (pixels/frame); direction components
    /// are always -BALL_SPEED, 0, or +BALL_SPEED
    pub const BALL_SPEED: i32 = 3;

    /// Brick grid layout
    pub const GRID_COLS: usize = 8;
    pub const GRID_ROWS: usize = 3;
    pub const GRID_ORIGIN_X: i32 = 100;
    pub const GRID_ORIGIN_Y: i32 = 80;
    pub const GRID_STEP_X: i32 = 65;
    pub const GRID_STEP_Y: i32 = 40;

    /// Score that clears the stage (every brick destroyed)
    pub const WIN_SCORE: u32 = (GRID_COLS * GRID_ROWS) as u32 * BRICK_SCORE;
}
