//! Audio trigger routing
//!
//! The simulation reports what happened through `GameEvent`s; this
//! module maps them to sound cues and forwards fire-and-forget
//! triggers to the frontend. When the audio device failed to
//! initialize the manager stays silent and the game plays on.

use crate::platform::Frontend;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits the paddle
    PaddleHit,
    /// Ball hits a screen edge
    WallHit,
    /// Ball hits a brick
    BrickHit,
    /// A brick breaks
    BrickBreak,
    /// New play session launched
    Launch,
    /// Ball lost
    GameOver,
    /// Stage cleared
    Victory,
}

/// Music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Title,
    Stage,
}

/// The sound cue for a simulation event, if it has one
pub fn cue_for(event: GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallBounce => Some(SoundEffect::WallHit),
        GameEvent::PaddleBounce => Some(SoundEffect::PaddleHit),
        GameEvent::BrickHit => Some(SoundEffect::BrickHit),
        GameEvent::BrickDestroyed => Some(SoundEffect::BrickBreak),
        GameEvent::BallLost => Some(SoundEffect::GameOver),
        GameEvent::Won => Some(SoundEffect::Victory),
    }
}

/// Audio manager for the game
pub struct AudioManager {
    available: bool,
    sfx_volume: f32,
    music_volume: f32,
}

impl AudioManager {
    /// Build from the frontend's device-init result and the session
    /// settings. A failed init is logged once and disables every
    /// trigger from then on.
    pub fn new(available: bool, settings: &Settings) -> Self {
        if !available {
            log::warn!("audio device unavailable - sound disabled");
        }
        Self {
            available,
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
        }
    }

    /// Play a sound effect
    pub fn play<F: Frontend>(&self, frontend: &mut F, effect: SoundEffect) {
        if !self.available || self.sfx_volume <= 0.0 {
            return;
        }
        frontend.play_sound(effect);
    }

    /// Start a music track
    pub fn play_music<F: Frontend>(&self, frontend: &mut F, track: MusicTrack, looped: bool) {
        if !self.available || self.music_volume <= 0.0 {
            return;
        }
        frontend.play_music(track, looped);
    }

    /// Forward the cue for one simulation event, if any
    pub fn handle<F: Frontend>(&self, frontend: &mut F, event: GameEvent) {
        if let Some(effect) = cue_for(event) {
            self.play(frontend, effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessFrontend;

    #[test]
    fn test_every_event_maps_to_a_cue() {
        for event in [
            GameEvent::WallBounce,
            GameEvent::PaddleBounce,
            GameEvent::BrickHit,
            GameEvent::BrickDestroyed,
            GameEvent::BallLost,
            GameEvent::Won,
        ] {
            assert!(cue_for(event).is_some(), "no cue for {event:?}");
        }
    }

    #[test]
    fn test_triggers_forwarded_when_available() {
        let mut frontend = HeadlessFrontend::new(10);
        let audio = AudioManager::new(true, &Settings::default());
        audio.handle(&mut frontend, GameEvent::PaddleBounce);
        audio.play_music(&mut frontend, MusicTrack::Stage, true);
        assert_eq!(frontend.sounds, vec![SoundEffect::PaddleHit]);
        assert_eq!(frontend.music, vec![(MusicTrack::Stage, true)]);
    }

    #[test]
    fn test_unavailable_device_stays_silent() {
        let mut frontend = HeadlessFrontend::new(10);
        let audio = AudioManager::new(false, &Settings::default());
        audio.handle(&mut frontend, GameEvent::PaddleBounce);
        audio.play_music(&mut frontend, MusicTrack::Title, true);
        assert!(frontend.sounds.is_empty());
        assert!(frontend.music.is_empty());
    }

    #[test]
    fn test_muted_settings_stay_silent() {
        let mut frontend = HeadlessFrontend::new(10);
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let audio = AudioManager::new(true, &settings);
        audio.play(&mut frontend, SoundEffect::WallHit);
        assert!(frontend.sounds.is_empty());
    }
}
