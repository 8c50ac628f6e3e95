//! Scripted, recording frontend for tests and the demo binary
//!
//! Events are scheduled against a frame counter that advances on
//! `present`; once the frame cap is reached a single Quit is injected
//! so every session terminates. Draw and audio commands are recorded
//! as counters and logs for assertions.

use std::collections::{HashMap, VecDeque};

use super::{Color, Event, Frontend, TextureHandle};
use crate::audio::{MusicTrack, SoundEffect};
use crate::sim::Rect;

/// A `Frontend` with no window behind it
pub struct HeadlessFrontend {
    frame: u64,
    max_frames: u64,
    script: VecDeque<(u64, Event)>,
    quit_sent: bool,

    audio_available: bool,
    font_available: bool,
    textures_available: bool,

    next_handle: u32,
    dimensions: HashMap<TextureHandle, (u32, u32)>,

    /// Recorded command log
    pub clears: u64,
    pub filled_rects: u64,
    pub drawn_textures: u64,
    pub presents: u64,
    pub sounds: Vec<SoundEffect>,
    pub music: Vec<(MusicTrack, bool)>,
}

impl HeadlessFrontend {
    /// Frontend that injects Quit after `max_frames` presents
    pub fn new(max_frames: u64) -> Self {
        Self {
            frame: 0,
            max_frames,
            script: VecDeque::new(),
            quit_sent: false,
            audio_available: true,
            font_available: true,
            textures_available: true,
            next_handle: 1,
            dimensions: HashMap::new(),
            clears: 0,
            filled_rects: 0,
            drawn_textures: 0,
            presents: 0,
            sounds: Vec::new(),
            music: Vec::new(),
        }
    }

    /// Simulate a missing audio device
    pub fn without_audio(mut self) -> Self {
        self.audio_available = false;
        self
    }

    /// Simulate a missing font
    pub fn without_font(mut self) -> Self {
        self.font_available = false;
        self
    }

    /// Simulate missing image assets
    pub fn without_textures(mut self) -> Self {
        self.textures_available = false;
        self
    }

    /// Queue an event for delivery on the given frame. Schedule in
    /// ascending frame order; same-frame events deliver in call order.
    pub fn schedule(&mut self, frame: u64, event: Event) {
        debug_assert!(
            self.script.back().is_none_or(|(f, _)| *f <= frame),
            "script must be scheduled in frame order"
        );
        self.script.push_back((frame, event));
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn alloc_texture(&mut self, w: u32, h: u32) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        self.dimensions.insert(handle, (w, h));
        handle
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_event(&mut self) -> Option<Event> {
        if let Some((due, _)) = self.script.front()
            && *due <= self.frame
        {
            return self.script.pop_front().map(|(_, event)| event);
        }
        if self.frame >= self.max_frames && !self.quit_sent {
            self.quit_sent = true;
            return Some(Event::Quit);
        }
        None
    }

    fn init_audio(&mut self) -> bool {
        self.audio_available
    }

    fn load_texture(&mut self, _path: &str) -> Option<TextureHandle> {
        if !self.textures_available {
            return None;
        }
        Some(self.alloc_texture(80, 40))
    }

    fn clear(&mut self, _color: Color) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Color) {
        self.filled_rects += 1;
    }

    fn draw_texture(&mut self, _handle: TextureHandle, _x: i32, _y: i32, _clip: Option<Rect>) {
        self.drawn_textures += 1;
    }

    fn render_text(&mut self, content: &str, _color: Color) -> Option<TextureHandle> {
        if !self.font_available {
            return None;
        }
        // Fixed-width stand-in glyphs
        let w = (content.len() as u32) * 10;
        Some(self.alloc_texture(w.max(1), 24))
    }

    fn texture_dimensions(&self, handle: TextureHandle) -> (u32, u32) {
        self.dimensions.get(&handle).copied().unwrap_or((0, 0))
    }

    fn play_sound(&mut self, effect: SoundEffect) {
        self.sounds.push(effect);
    }

    fn play_music(&mut self, track: MusicTrack, looped: bool) {
        self.music.push((track, looped));
    }

    fn present(&mut self) {
        self.presents += 1;
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;

    #[test]
    fn test_events_deliver_on_their_frame() {
        let mut f = HeadlessFrontend::new(100);
        let press = Event::KeyDown {
            key: Key::Space,
            repeat: false,
        };
        f.schedule(2, press);

        assert_eq!(f.poll_event(), None);
        f.present();
        f.present();
        assert_eq!(f.poll_event(), Some(press));
        assert_eq!(f.poll_event(), None);
    }

    #[test]
    fn test_frame_cap_injects_quit_once() {
        let mut f = HeadlessFrontend::new(2);
        f.present();
        assert_eq!(f.poll_event(), None);
        f.present();
        assert_eq!(f.poll_event(), Some(Event::Quit));
        assert_eq!(f.poll_event(), None);
    }

    #[test]
    fn test_text_textures_report_dimensions() {
        let mut f = HeadlessFrontend::new(10);
        let handle = f.render_text("SCORE 100", Color::WHITE).unwrap();
        assert_eq!(f.texture_dimensions(handle), (90, 24));
    }

    #[test]
    fn test_degraded_flags() {
        let mut f = HeadlessFrontend::new(10)
            .without_audio()
            .without_font()
            .without_textures();
        assert!(!f.init_audio());
        assert!(f.render_text("X", Color::WHITE).is_none());
        assert!(f.load_texture("player.png").is_none());
    }
}
