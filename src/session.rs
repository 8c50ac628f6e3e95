//! Game session state machine
//!
//! A `Session` owns the game state and drives one inner
//! poll/update/render/present loop per mode. Transitions:
//! Menu -> Play on Space, Play -> Score when the ball falls out,
//! Play -> Win when the grid is cleared, Score/Win -> Menu on Space,
//! and Quit moves any mode to Exit, which halts the outer loop.

use crate::audio::{AudioManager, MusicTrack, SoundEffect};
use crate::highscores::HighScores;
use crate::platform::{Color, Event, Frontend, Key, TextureHandle};
use crate::settings::Settings;
use crate::sim::{GameMode, GameState, tick};
use crate::ui::Hud;

/// One run of the game, from launch to quit
pub struct Session<F: Frontend> {
    frontend: F,
    state: GameState,
    audio: AudioManager,
    hud: Hud,
    highscores: HighScores,
    paddle_texture: Option<TextureHandle>,
}

impl<F: Frontend> Session<F> {
    /// Initialize collaborator resources and build the session.
    /// Failed loads degrade: no audio device means a silent game, a
    /// missing paddle sprite falls back to a flat fill.
    pub fn new(mut frontend: F, settings: Settings) -> Self {
        let audio_ok = frontend.init_audio();
        let audio = AudioManager::new(audio_ok, &settings);

        let paddle_texture = frontend.load_texture("player.png");
        if paddle_texture.is_none() {
            log::warn!("paddle sprite missing - using flat fill");
        }

        Self {
            frontend,
            state: GameState::new(),
            audio,
            hud: Hud::new(),
            highscores: HighScores::new(),
            paddle_texture,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    /// Run the state machine until Exit
    pub fn run(&mut self) {
        log::info!("session starting");
        while self.state.mode != GameMode::Exit {
            match self.state.mode {
                GameMode::Menu => self.menu_loop(),
                GameMode::Play => self.play_loop(),
                GameMode::Score | GameMode::Win => self.end_loop(),
                GameMode::Exit => {}
            }
        }
        log::info!("session over");
    }

    /// Title screen: static text until Space starts a play session
    fn menu_loop(&mut self) {
        self.audio
            .play_music(&mut self.frontend, MusicTrack::Title, true);

        while self.state.mode == GameMode::Menu {
            while let Some(event) = self.frontend.poll_event() {
                match event {
                    Event::Quit => {
                        self.state.mode = GameMode::Exit;
                        return;
                    }
                    Event::KeyDown {
                        key: Key::Space,
                        repeat: false,
                    } => {
                        self.state.start_play();
                        log::info!("new play session");
                        self.audio.play(&mut self.frontend, SoundEffect::Launch);
                        self.audio
                            .play_music(&mut self.frontend, MusicTrack::Stage, true);
                        break;
                    }
                    _ => {}
                }
            }
            if self.state.mode != GameMode::Menu {
                return;
            }

            self.frontend.clear(Color::BLACK);
            let best = self.highscores.top_score().map(|s| format!("BEST {s}"));
            self.hud.draw_banner(
                &mut self.frontend,
                "BRICK BREAKER",
                "PRESS SPACE TO PLAY",
                best.as_deref(),
            );
            self.frontend.present();
        }
    }

    /// Active gameplay: the full per-frame update plus score refresh
    fn play_loop(&mut self) {
        let mut events = Vec::new();
        let mut out = Vec::new();

        while self.state.mode == GameMode::Play {
            events.clear();
            while let Some(event) = self.frontend.poll_event() {
                match event {
                    Event::Quit => {
                        self.state.mode = GameMode::Exit;
                        return;
                    }
                    other => events.push(other),
                }
            }

            out.clear();
            tick(&mut self.state, &events, &mut out);
            for game_event in &out {
                self.audio.handle(&mut self.frontend, *game_event);
            }

            match self.state.mode {
                GameMode::Score => self.record_finish(false),
                GameMode::Win => self.record_finish(true),
                _ => {}
            }

            self.render_play();
            self.frontend.present();
        }
    }

    /// Ball-lost and stage-cleared screens share one loop; only the
    /// banner differs. Space returns to the menu.
    fn end_loop(&mut self) {
        let finished = self.state.mode;

        while self.state.mode == finished {
            while let Some(event) = self.frontend.poll_event() {
                match event {
                    Event::Quit => {
                        self.state.mode = GameMode::Exit;
                        return;
                    }
                    Event::KeyDown {
                        key: Key::Space,
                        repeat: false,
                    } => {
                        self.state.mode = GameMode::Menu;
                        break;
                    }
                    _ => {}
                }
            }
            if self.state.mode != finished {
                return;
            }

            self.frontend.clear(Color::BLACK);
            let title = if finished == GameMode::Win {
                "STAGE CLEARED"
            } else {
                "BALL LOST"
            };
            let info = format!("SCORE {}", self.state.paddle.score);
            self.hud.draw_banner(
                &mut self.frontend,
                title,
                "PRESS SPACE FOR MENU",
                Some(&info),
            );
            self.frontend.present();
        }
    }

    /// Book a finished play session into the leaderboard
    fn record_finish(&mut self, cleared: bool) {
        let score = self.state.paddle.score;
        log::info!(
            "play session over: score {score}, {}",
            if cleared { "stage cleared" } else { "ball lost" }
        );
        if let Some(rank) = self.highscores.add_score(score, cleared) {
            log::info!("high score rank {rank}");
        }
    }

    /// Draw one play frame after all state mutation is done
    fn render_play(&mut self) {
        self.frontend.clear(Color::BLACK);

        self.frontend
            .fill_rect(self.state.ball.rect(), Color::WHITE);

        for brick in self.state.grid.bricks() {
            if brick.alive {
                self.frontend.fill_rect(brick.body, Color::CYAN);
            }
        }

        let paddle = &self.state.paddle;
        match self.paddle_texture {
            Some(handle) => {
                self.frontend
                    .draw_texture(handle, paddle.pos.x, paddle.pos.y, None)
            }
            None => self.frontend.fill_rect(paddle.bounds(), Color::WHITE),
        }

        self.hud
            .draw_score(&mut self.frontend, self.state.paddle.score);
    }
}
