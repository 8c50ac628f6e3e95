//! Platform collaborator seam
//!
//! The core never opens a window, a mixer or a font itself; every mode
//! loop drains input events, mutates the simulation, and issues render
//! and audio commands through the [`Frontend`] trait. A windowed
//! implementation (SDL, winit, ...) lives outside this crate; the
//! in-tree [`HeadlessFrontend`] scripts input and records commands for
//! tests and the demo binary.

pub mod headless;

pub use headless::HeadlessFrontend;

use crate::audio::{MusicTrack, SoundEffect};
use crate::sim::Rect;

/// Keys the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    /// Anything else; delivered but ignored by the game
    Other,
}

/// An input event drained from the platform's pending queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// External quit signal (window close, interrupt)
    Quit,
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
}

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const CYAN: Color = Color::rgb(0x00, 0xFF, 0xFF);
}

/// Opaque handle to a texture owned by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// The rendering/input/audio collaborator the core drives.
///
/// Failure reporting follows the degraded-but-running rule: one-shot
/// loads return `Option`/`bool` success flags, draw and audio calls
/// are fire-and-forget, and `present` paces the frame (vsync on a real
/// frontend).
pub trait Frontend {
    /// Drain one pending input event, non-blocking
    fn poll_event(&mut self) -> Option<Event>;

    /// Bring up the audio device; false means the session runs silent
    fn init_audio(&mut self) -> bool;

    /// Load an image asset; None means the caller draws a fallback
    fn load_texture(&mut self, path: &str) -> Option<TextureHandle>;

    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_texture(&mut self, handle: TextureHandle, x: i32, y: i32, clip: Option<Rect>);

    /// Rasterize a line of text; None when no font is available
    fn render_text(&mut self, content: &str, color: Color) -> Option<TextureHandle>;
    fn texture_dimensions(&self, handle: TextureHandle) -> (u32, u32);

    fn play_sound(&mut self, effect: SoundEffect);
    fn play_music(&mut self, track: MusicTrack, looped: bool);

    /// Flip the frame; the de facto frame-rate limiter
    fn present(&mut self);
}
