//! The per-frame Play update
//!
//! One call advances the whole simulation by one frame: input events
//! feed the paddle, the paddle and ball move, then collisions resolve
//! in a fixed order - screen edges, paddle sub-colliders, every brick
//! in grid order. The order matters: each stage sees the ball
//! direction as left by the stage before it, so simultaneous contacts
//! resolve last-write-wins exactly once per frame.

use super::collision::{resolve_paddle, resolve_walls};
use super::state::{GameEvent, GameMode, GameState};
use crate::consts::*;
use crate::platform::Event;

/// Advance one Play frame.
///
/// `events` is the frame's drained input queue; notifications for the
/// session (audio cues, loss/win) are pushed onto `out`. Mode
/// transitions are written straight into `state.mode`: the bottom edge
/// moves Play to Score, a full score moves Play to Win. A frame that
/// loses the ball never also wins.
pub fn tick(state: &mut GameState, events: &[Event], out: &mut Vec<GameEvent>) {
    debug_assert_eq!(state.mode, GameMode::Play);

    for event in events {
        state.paddle.handle_event(event);
    }

    state.paddle.advance();
    state.ball.advance();

    let wall = resolve_walls(state.ball.pos, state.ball.dir);
    state.ball.dir = wall.dir;
    if wall.bounced {
        out.push(GameEvent::WallBounce);
    }
    if wall.fell_out {
        state.mode = GameMode::Score;
        out.push(GameEvent::BallLost);
    }

    let ball_rect = state.ball.rect();

    let deflected = resolve_paddle(&ball_rect, state.ball.dir, &state.paddle);
    if deflected != state.ball.dir {
        state.ball.dir = deflected;
        out.push(GameEvent::PaddleBounce);
    }

    // Bricks resolve in layout order; no shot mechanic feeds the
    // projectile slot during normal play
    for brick in state.grid.bricks_mut() {
        let verdict = brick.resolve_collision(&ball_rect, state.ball.dir, None);
        state.ball.dir = verdict.dir;
        if verdict.damaged {
            out.push(GameEvent::BrickHit);
        }
        if verdict.score_delta > 0 {
            state.paddle.score += verdict.score_delta;
            out.push(GameEvent::BrickDestroyed);
        }
        brick.advance();
    }

    if state.mode == GameMode::Play && state.paddle.score >= WIN_SCORE {
        state.mode = GameMode::Win;
        out.push(GameEvent::Won);
    }
}
