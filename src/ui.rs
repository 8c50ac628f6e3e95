//! HUD and banner text
//!
//! Text textures are cached per line: a line is rasterized only when
//! its content changes, never per frame. A missing font degrades to
//! skipping the line (warned once per line, not once per frame).

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Color, Frontend, TextureHandle};

/// One cached line of text
#[derive(Debug, Default)]
struct TextLine {
    text: String,
    handle: Option<TextureHandle>,
    warned: bool,
}

impl TextLine {
    /// Re-rasterize if the content changed, then return the handle
    fn refresh<F: Frontend>(
        &mut self,
        frontend: &mut F,
        content: &str,
        color: Color,
    ) -> Option<TextureHandle> {
        if self.text != content {
            self.handle = frontend.render_text(content, color);
            self.text = content.to_owned();
            if self.handle.is_none() && !self.warned {
                log::warn!("font unavailable - text not rendered: {content:?}");
                self.warned = true;
            }
        }
        self.handle
    }

    fn draw_at<F: Frontend>(&mut self, frontend: &mut F, content: &str, color: Color, x: i32, y: i32) {
        if let Some(handle) = self.refresh(frontend, content, color) {
            frontend.draw_texture(handle, x, y, None);
        }
    }

    /// Horizontally centered via the texture's reported width
    fn draw_centered<F: Frontend>(&mut self, frontend: &mut F, content: &str, color: Color, y: i32) {
        if let Some(handle) = self.refresh(frontend, content, color) {
            let (w, _) = frontend.texture_dimensions(handle);
            let x = (SCREEN_WIDTH - w as i32) / 2;
            frontend.draw_texture(handle, x, y, None);
        }
    }
}

/// All text surfaces a session draws
#[derive(Debug, Default)]
pub struct Hud {
    score: TextLine,
    title: TextLine,
    prompt: TextLine,
    info: TextLine,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// In-play score readout, top-left corner
    pub fn draw_score<F: Frontend>(&mut self, frontend: &mut F, score: u32) {
        let content = format!("SCORE {score}");
        self.score.draw_at(frontend, &content, Color::WHITE, 10, 10);
    }

    /// Centered three-line banner for the static screens
    pub fn draw_banner<F: Frontend>(
        &mut self,
        frontend: &mut F,
        title: &str,
        prompt: &str,
        info: Option<&str>,
    ) {
        let mid = SCREEN_HEIGHT / 2;
        self.title
            .draw_centered(frontend, title, Color::CYAN, mid - 80);
        self.prompt
            .draw_centered(frontend, prompt, Color::WHITE, mid);
        if let Some(info) = info {
            self.info
                .draw_centered(frontend, info, Color::WHITE, mid + 40);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessFrontend;

    #[test]
    fn test_score_texture_rendered_once_per_value() {
        let mut frontend = HeadlessFrontend::new(10);
        let mut hud = Hud::new();

        hud.draw_score(&mut frontend, 100);
        hud.draw_score(&mut frontend, 100);
        hud.draw_score(&mut frontend, 100);
        // One rasterization, three draws
        assert_eq!(frontend.drawn_textures, 3);
        let first = hud.score.handle;

        hud.draw_score(&mut frontend, 200);
        assert_ne!(hud.score.handle, first);
    }

    #[test]
    fn test_missing_font_skips_lines() {
        let mut frontend = HeadlessFrontend::new(10).without_font();
        let mut hud = Hud::new();
        hud.draw_score(&mut frontend, 100);
        hud.draw_banner(&mut frontend, "BRICK BREAKER", "PRESS SPACE", None);
        assert_eq!(frontend.drawn_textures, 0);
    }

    #[test]
    fn test_banner_centers_on_texture_width() {
        let mut frontend = HeadlessFrontend::new(10);
        let mut hud = Hud::new();
        hud.draw_banner(&mut frontend, "HI", "PRESS SPACE", Some("BEST 500"));
        assert_eq!(frontend.drawn_textures, 3);
    }
}
