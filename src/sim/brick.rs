//! The destructible brick ("enemy") and its directional sub-colliders
//!
//! A brick never moves. Each of its four edges carries its own
//! collider so a hit can tell which face the ball struck; destruction
//! is purely logical - the brick stays allocated, its colliders are
//! parked off screen and `reset` brings it back for the next session.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::resolve_brick;
use super::rect::Rect;
use crate::consts::*;

/// What one brick resolution decided, for the caller to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickVerdict {
    /// Brick survives into the next frame
    pub still_alive: bool,
    /// Ball direction after this brick's rules
    pub dir: IVec2,
    /// Score to award (nonzero exactly once per brick lifetime)
    pub score_delta: u32,
    /// At least one edge rule connected
    pub damaged: bool,
}

/// A destructible brick at a fixed grid position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner of the body
    pub pos: IVec2,
    /// Full body rectangle (render bounds)
    pub body: Rect,
    pub collider_up: Rect,
    pub collider_down: Rect,
    pub collider_left: Rect,
    pub collider_right: Rect,
    /// Normalized to 0 or 1 every resolution; rule stacking can push
    /// it outside that range transiently within a single call
    pub health_points: i32,
    pub alive: bool,
    /// Guards against awarding the destruction bonus twice
    pub scored: bool,
}

impl Brick {
    pub fn new(x: i32, y: i32) -> Self {
        let (w, h) = (BRICK_WIDTH, BRICK_HEIGHT);
        Self {
            pos: IVec2::new(x, y),
            body: Rect::new(x, y, w, h),
            collider_up: Rect::new(x + 2, y, w - 4, h / 2),
            collider_down: Rect::new(x + 2, y + h / 2, w - 4, h / 2),
            collider_left: Rect::new(x, y, w / 2 + 2, h - 4),
            collider_right: Rect::new(x + w / 2, y + 2, w / 2, h - 4),
            health_points: 1,
            alive: true,
            scored: false,
        }
    }

    /// Run the rule chain for this frame and apply its decision.
    ///
    /// Returns the verdict for the caller to fold into the ball
    /// direction and the score. `shot` is an optional externally
    /// supplied projectile rectangle; when it overlaps the bottom
    /// collider the brick is destroyed outright, no deflection.
    pub fn resolve_collision(
        &mut self,
        ball: &Rect,
        dir: IVec2,
        shot: Option<&Rect>,
    ) -> BrickVerdict {
        let decision = resolve_brick(ball, dir, self, shot);

        self.health_points -= decision.damage;
        if decision.lethal {
            self.alive = false;
        }

        if decision.shot_destroys {
            self.health_points -= 1;
            self.alive = false;
        } else {
            // Health drives the flag when no shot intervened. Exact
            // comparisons: stacked rules can leave health at -1, and
            // then the lethal mark above stands untouched.
            if self.health_points == 1 {
                self.alive = true;
            } else if self.health_points == 0 {
                self.alive = false;
            }
        }

        let mut score_delta = 0;
        if !self.alive && !self.scored {
            score_delta = BRICK_SCORE;
            self.scored = true;
        }

        BrickVerdict {
            still_alive: self.alive,
            dir: decision.dir,
            score_delta,
            damaged: decision.damage > 0,
        }
    }

    /// Per-frame housekeeping: a dead brick parks every collider at a
    /// negative off-screen position so later overlap tests trivially
    /// miss. Alive bricks are immobile, so there is nothing to do.
    pub fn advance(&mut self) {
        if self.alive {
            return;
        }
        let parked = IVec2::new(-BRICK_WIDTH, -BRICK_HEIGHT);
        self.collider_up.place(parked);
        self.collider_down.place(parked);
        self.collider_left.place(parked);
        self.collider_right.place(parked);
    }

    /// Restore the brick to a freshly-constructed state at (x, y)
    pub fn reset(&mut self, x: i32, y: i32) {
        *self = Self::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A ball rect positioned to touch exactly one sub-collider of a
    // brick at (100, 80): body 100..150 x 80..105, up 102..148 x
    // 80..92, down 102..148 x 92..104, left 100..127 x 80..101,
    // right 125..150 x 82..103.

    #[test]
    fn test_fresh_brick_geometry() {
        let b = Brick::new(100, 80);
        assert_eq!(b.body, Rect::new(100, 80, 50, 25));
        assert_eq!(b.collider_up, Rect::new(102, 80, 46, 12));
        assert_eq!(b.collider_down, Rect::new(102, 92, 46, 12));
        assert_eq!(b.collider_left, Rect::new(100, 80, 27, 21));
        assert_eq!(b.collider_right, Rect::new(125, 82, 25, 21));
        assert!(b.alive);
        assert_eq!(b.health_points, 1);
        assert!(!b.scored);
    }

    #[test]
    fn test_top_hit_reflects_and_destroys() {
        let mut b = Brick::new(100, 80);
        // Falling ball clipping only the top collider: bottom edge at
        // 81 stays above the right collider, left edge at 127 stays
        // clear of the left collider
        let ball = Rect::new(127, 61, 20, 20);
        let v = b.resolve_collision(&ball, IVec2::new(3, 3), None);
        assert_eq!(v.dir, IVec2::new(-3, -3));
        assert!(v.damaged);
        // Health reached 0, so normalization killed the brick and the
        // bonus was granted
        assert!(!v.still_alive);
        assert_eq!(v.score_delta, BRICK_SCORE);
    }

    #[test]
    fn test_deep_top_hit_cascades_through_side_rules() {
        let mut b = Brick::new(100, 80);
        // A ball this deep overlaps the top collider and both side
        // colliders. The top rule reverses the vertical component,
        // which arms the side rules in the same call: left then right
        // fire in order and the right rule has the last word on x.
        let ball = Rect::new(115, 70, 20, 20);
        let v = b.resolve_collision(&ball, IVec2::new(3, 3), None);
        assert_eq!(v.dir, IVec2::new(3, -3));
        assert!(!v.still_alive);
        assert_eq!(b.health_points, -2);
        assert_eq!(v.score_delta, BRICK_SCORE);
    }

    #[test]
    fn test_bottom_hit_kills() {
        let mut b = Brick::new(100, 80);
        // Rising ball under the brick, clear of the top collider
        let ball = Rect::new(113, 95, 20, 20);
        let v = b.resolve_collision(&ball, IVec2::new(3, -3), None);
        assert_eq!(v.dir, IVec2::new(-3, 3));
        assert!(!v.still_alive);
        assert_eq!(v.score_delta, BRICK_SCORE);
        assert_eq!(b.health_points, 0);
    }

    #[test]
    fn test_left_hit_forces_direction() {
        let mut b = Brick::new(100, 80);
        // Rising ball grazing the left collider's outer 2px
        let ball = Rect::new(82, 85, 20, 20);
        let v = b.resolve_collision(&ball, IVec2::new(3, -3), None);
        assert_eq!(v.dir, IVec2::new(-3, -3));
        assert!(!v.still_alive);
    }

    #[test]
    fn test_right_hit_forces_direction() {
        let mut b = Brick::new(100, 80);
        // Rising ball grazing the right collider from outside the body
        let ball = Rect::new(148, 85, 20, 20);
        let v = b.resolve_collision(&ball, IVec2::new(-3, -3), None);
        assert_eq!(v.dir, IVec2::new(3, -3));
        assert!(!v.still_alive);
    }

    #[test]
    fn test_rising_ball_ignores_top_collider() {
        let mut b = Brick::new(100, 80);
        let ball = Rect::new(127, 61, 20, 20);
        let v = b.resolve_collision(&ball, IVec2::new(3, -3), None);
        assert_eq!(v.dir, IVec2::new(3, -3));
        assert!(v.still_alive);
        assert!(!v.damaged);
    }

    #[test]
    fn test_shot_destroys_without_deflection() {
        let mut b = Brick::new(100, 80);
        let shot = Rect::new(110, 95, 5, 10);
        let away = Rect::new(700, 500, 20, 20);
        let v = b.resolve_collision(&away, IVec2::new(3, 3), Some(&shot));
        assert!(!v.still_alive);
        assert_eq!(v.dir, IVec2::new(3, 3));
        assert_eq!(v.score_delta, BRICK_SCORE);
    }

    #[test]
    fn test_score_awarded_once() {
        let mut b = Brick::new(100, 80);
        let ball = Rect::new(113, 95, 20, 20);
        let first = b.resolve_collision(&ball, IVec2::new(3, -3), None);
        assert_eq!(first.score_delta, BRICK_SCORE);
        b.advance();

        // Dead brick keeps resolving every frame without paying again
        let again = b.resolve_collision(&ball, IVec2::new(3, -3), None);
        assert_eq!(again.score_delta, 0);
        assert!(!again.still_alive);
        assert!(!again.damaged);
    }

    #[test]
    fn test_dead_brick_colliders_parked_off_screen() {
        let mut b = Brick::new(100, 80);
        let ball = Rect::new(113, 95, 20, 20);
        b.resolve_collision(&ball, IVec2::new(3, -3), None);
        b.advance();

        let screen = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        for c in [
            &b.collider_up,
            &b.collider_down,
            &b.collider_left,
            &b.collider_right,
        ] {
            assert!(c.right() <= 0 || c.bottom() <= 0);
            assert!(!crate::sim::rect::overlaps(c, &screen));
        }
    }

    #[test]
    fn test_reset_matches_fresh_construction() {
        let mut b = Brick::new(100, 80);
        let ball = Rect::new(113, 95, 20, 20);
        b.resolve_collision(&ball, IVec2::new(3, -3), None);
        b.advance();

        b.reset(100, 80);
        assert_eq!(b, Brick::new(100, 80));
    }
}
