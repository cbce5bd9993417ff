//! Coordinate transforms between world space and sprite-local mask space.

use crate::moves::{CollisionPoint, SpriteMask};
use crate::types::{Facing, Position};

/// Axis-aligned rectangle in world space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Strict containment: points on the border are outside.
    pub const fn contains(&self, point: Position) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }
}

/// A sprite placed in the world at its owner's position and facing.
///
/// Mirrored sprites extend to the left of the owner: the anchor offset is
/// negated and the box shifted by the sprite width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpritePlacement {
    pub bounds: Rect,
    pub facing: Facing,
}

impl SpritePlacement {
    pub fn new(owner: Position, sprite: &SpriteMask, facing: Facing) -> Self {
        let width = sprite.width as i32;
        let x = match facing {
            Facing::Right => owner.x + sprite.anchor_x,
            Facing::Left => owner.x - sprite.anchor_x - width,
        };
        Self {
            bounds: Rect {
                x,
                y: owner.y + sprite.anchor_y,
                width,
                height: sprite.height as i32,
            },
            facing,
        }
    }

    /// Mask coordinate under world point `point`, or `None` when the point
    /// is outside the sprite box.
    pub fn to_local(&self, point: Position) -> Option<(i32, i32)> {
        if !self.bounds.contains(point) {
            return None;
        }
        let x = point.x - self.bounds.x;
        let y = point.y - self.bounds.y;
        match self.facing {
            Facing::Right => Some((x, y)),
            Facing::Left => Some((self.bounds.width - x, y)),
        }
    }

    /// World point drawn for mask coordinate `(x, y)`.
    pub fn to_world(&self, x: i32, y: i32) -> Position {
        let x = match self.facing {
            Facing::Right => x,
            Facing::Left => self.bounds.width - x,
        };
        Position::new(self.bounds.x + x, self.bounds.y + y)
    }
}

/// World position of an attacker's collision point.
pub const fn attack_point(point: &CollisionPoint, origin: Position, facing: Facing) -> Position {
    Position::new(point.x * facing.sign() + origin.x, point.y + origin.y)
}

/// Where a fighter walking toward its opponent is stopped.
///
/// Returns the clamped x when the walker at `walker_x`, facing `facing`, is
/// within `margin` of `target_x` on the side it is facing.
pub const fn close_in(walker_x: i32, target_x: i32, facing: Facing, margin: i32) -> Option<i32> {
    match facing {
        Facing::Left if walker_x < target_x + margin && walker_x > target_x => {
            Some(target_x + margin)
        }
        Facing::Right if walker_x + margin > target_x && walker_x < target_x => {
            Some(target_x - margin)
        }
        _ => None,
    }
}
