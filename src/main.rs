//! Brick Breaker entry point
//!
//! No windowed frontend is wired in yet; running the binary plays a
//! short scripted session on the headless frontend and logs the
//! outcome, which doubles as a smoke check of the whole state machine.

use brick_breaker::platform::{Event, HeadlessFrontend, Key};
use brick_breaker::{Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Brick Breaker starting...");

    let mut frontend = HeadlessFrontend::new(600);
    // Start a session, sweep the paddle both ways, let the frame cap quit
    frontend.schedule(2, press(Key::Space));
    frontend.schedule(10, press(Key::Right));
    frontend.schedule(40, release(Key::Right));
    frontend.schedule(60, press(Key::Left));
    frontend.schedule(110, release(Key::Left));

    let mut session = Session::new(frontend, Settings::default());
    session.run();

    let state = session.state();
    log::info!(
        "demo over: score {}, {} of {} bricks standing",
        state.paddle.score,
        state.grid.alive_count(),
        state.grid.len()
    );
}

fn press(key: Key) -> Event {
    Event::KeyDown { key, repeat: false }
}

fn release(key: Key) -> Event {
    Event::KeyUp { key, repeat: false }
}
