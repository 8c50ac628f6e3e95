//! Collision decisions for the ball against walls, paddle and bricks
//!
//! Every resolver here is a pure function: it takes the ball's current
//! direction by value and returns the direction (and any bookkeeping)
//! that should result, leaving the caller to apply it. The rules inside
//! one resolver form a sequential chain - a later rule tests the
//! direction as rewritten by earlier rules in the same call, which is
//! what makes simultaneous overlaps resolve last-write-wins in rule
//! order.

use glam::IVec2;

use super::brick::Brick;
use super::rect::{Rect, overlaps};
use super::state::Paddle;
use crate::consts::*;

/// Outcome of the screen-edge checks for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallOutcome {
    /// Direction after any edge deflections
    pub dir: IVec2,
    /// A left/right/top edge assignment fired
    pub bounced: bool,
    /// The ball crossed the bottom boundary (session loss)
    pub fell_out: bool,
}

/// Deflect the ball off the screen edges.
///
/// The bottom edge still reverses the vertical direction, but it also
/// reports the loss so the state machine can leave Play.
pub fn resolve_walls(pos: IVec2, dir: IVec2) -> WallOutcome {
    let mut dir = dir;
    let mut bounced = false;
    let mut fell_out = false;

    if pos.x <= 0 {
        dir.x = BALL_SPEED;
        bounced = true;
    }
    if pos.x >= SCREEN_WIDTH - BALL_SIZE {
        dir.x = -BALL_SPEED;
        bounced = true;
    }
    if pos.y <= 0 {
        dir.y = BALL_SPEED;
        bounced = true;
    }
    if pos.y >= SCREEN_HEIGHT - BALL_SIZE {
        dir.y = -BALL_SPEED;
        fell_out = true;
    }

    WallOutcome {
        dir,
        bounced,
        fell_out,
    }
}

/// Deflect a downward-moving ball off the paddle's three sub-colliders.
///
/// Tested mid, then left, then right. The mid third reflects vertically
/// only; the outer thirds also force the ball toward their side. Once
/// the mid rule reflects, the outer rules see an upward-moving ball and
/// stay quiet.
pub fn resolve_paddle(ball: &Rect, dir: IVec2, paddle: &Paddle) -> IVec2 {
    let mut dir = dir;

    if overlaps(ball, &paddle.collider_mid) && dir.y == BALL_SPEED {
        dir.y = -BALL_SPEED;
    }
    if overlaps(ball, &paddle.collider_left) && dir.y == BALL_SPEED {
        dir.y = -BALL_SPEED;
        dir.x = -BALL_SPEED;
    }
    if overlaps(ball, &paddle.collider_right) && dir.y == BALL_SPEED {
        dir.y = -BALL_SPEED;
        dir.x = BALL_SPEED;
    }

    dir
}

/// Decision produced by the brick rule chain, applied by [`Brick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickDecision {
    /// Ball direction after the chain
    pub dir: IVec2,
    /// Health decrements requested (rules can stack within one call)
    pub damage: i32,
    /// An edge rule marked the brick dead
    pub lethal: bool,
    /// The supplied shot rectangle overlapped the bottom collider
    pub shot_destroys: bool,
}

/// Run the brick's directional rule chain against the ball.
///
/// The four edge rules run in up/down/left/right order against the
/// live direction, so a rule that reverses the vertical component can
/// arm (or disarm) the rules after it - overlapping sub-colliders may
/// legitimately fire more than one rule in a single call.
pub fn resolve_brick(ball: &Rect, dir: IVec2, brick: &Brick, shot: Option<&Rect>) -> BrickDecision {
    let mut dir = dir;
    let mut damage = 0;
    let mut lethal = false;

    // Top edge: reflect a falling ball, no death mark here - health
    // normalization in the apply step settles the alive flag
    if overlaps(ball, &brick.collider_up) && dir.y == BALL_SPEED {
        dir.y = -BALL_SPEED;
        if dir.x != 0 {
            dir.x = -dir.x;
        }
        damage += 1;
    }
    if overlaps(ball, &brick.collider_down) && dir.y == -BALL_SPEED {
        dir.y = BALL_SPEED;
        if dir.x != 0 {
            dir.x = -dir.x;
        }
        damage += 1;
        lethal = true;
    }
    if overlaps(ball, &brick.collider_left) && dir.y == -BALL_SPEED {
        dir.x = -BALL_SPEED;
        damage += 1;
        lethal = true;
    }
    if overlaps(ball, &brick.collider_right) && dir.y == -BALL_SPEED {
        dir.x = BALL_SPEED;
        damage += 1;
        lethal = true;
    }

    let shot_destroys = shot.is_some_and(|s| overlaps(&brick.collider_down, s));

    BrickDecision {
        dir,
        damage,
        lethal,
        shot_destroys,
    }
}
