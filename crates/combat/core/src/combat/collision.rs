//! Sprite-accurate hit resolution.
//!
//! Each tick the resolver runs once per direction. An attack connects when
//! one of the attacker's collision points for its current frame lands on a
//! solid pixel of the defender's displayed sprite; the defender's bounding
//! box is only a coarse pre-filter.

use tracing::{debug, trace};

use super::debug::{Color, DebugImage};
use super::geometry::{SpritePlacement, attack_point, close_in};
use crate::config::CombatConfig;
use crate::fighter::{CombatState, Fighter};
use crate::moves::{MoveCategory, SpriteMask};
use crate::types::{AnimationId, Position};

/// Result of one directional resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitOutcome {
    #[default]
    None,
    /// A collision point entered the defender's box but missed the sprite.
    Box,
    /// The attack connected.
    Pixel,
}

impl HitOutcome {
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Pixel)
    }
}

/// Resolves `attacker`'s current attack against `defender`.
///
/// On a hit the defender takes the move's damage; the hit that defeats it
/// sends the attacker into `Victory`. Finishing moves landing on an already
/// defeated defender leave the attacker's state alone. A walking attacker that has reached the
/// defender is then held at the close margin and flagged close, which is
/// what close-range moves check for.
pub fn resolve_hit(attacker: &mut Fighter, defender: &mut Fighter) -> HitOutcome {
    attacker.clear_close();

    let mut image = attacker.debug.take();
    let outcome = scan(attacker, defender, image.as_mut());
    attacker.debug = image;

    if outcome.is_hit() {
        let was_defeated = defender.is_defeated();
        if let Some(attack) = attacker.current_move() {
            debug!(
                attacker = %attacker.slot(),
                defender = %defender.slot(),
                move_id = %attack.id,
                damage = attack.damage,
                "attack connected"
            );
            defender.apply_damage(attack.damage, attack.footer.as_deref());
        }
        if !was_defeated && defender.is_defeated() {
            debug!(winner = %attacker.slot(), "defender defeated");
            attacker.enter_victory();
        }
    }

    if attacker.state() == CombatState::Walking {
        let margin = attacker.config().close_margin;
        if let Some(x) = close_in(
            attacker.position().x,
            defender.position().x,
            attacker.facing(),
            margin,
        ) {
            trace!(fighter = %attacker.slot(), x, "holding at close range");
            attacker.hold_close(x);
        }
    }

    outcome
}

fn scan(attacker: &Fighter, defender: &Fighter, mut image: Option<&mut DebugImage>) -> HitOutcome {
    let Some(attack) = attacker.current_move() else {
        return HitOutcome::None;
    };
    if defender.animation_id() == AnimationId::DAMAGE || !defender.animation().is_frame_ready() {
        return HitOutcome::None;
    }
    let Some(sprite) = defender.current_sprite() else {
        trace!(defender = %defender.slot(), "no sprite for displayed frame");
        return HitOutcome::None;
    };

    let placement = SpritePlacement::new(defender.position(), sprite, defender.facing());
    let origin = attacker.position();
    let frame = attacker.animation().frame_index();

    if let Some(image) = image.as_deref_mut() {
        draw_defender(image, &placement, sprite);
        plot(image, origin, Color::ORIGIN);
        plot(image, defender.position(), Color::ORIGIN);
    }

    let mut box_hit = false;
    let mut pixel_hit = false;
    for (index, point) in attack.frames.points_on_frame(frame) {
        let world = attack_point(point, origin, attacker.facing());
        if let Some(image) = image.as_deref_mut() {
            plot(image, world, Color::POINT);
        }
        let Some((x, y)) = placement.to_local(world) else {
            continue;
        };
        box_hit = true;
        if let Some(image) = image.as_deref_mut() {
            plot(image, world, Color::BOX_HIT);
        }
        if !sprite.is_solid(x, y) {
            continue;
        }

        if !pixel_hit {
            trace!(point = index, local_x = x, local_y = y, "solid pixel hit");
        }
        pixel_hit = true;
        match image.as_deref_mut() {
            Some(image) => plot(image, world, Color::PIXEL_HIT),
            None => break,
        }
    }

    if let Some(image) = image {
        if box_hit || pixel_hit {
            image.mark_dirty();
        }
    }

    if pixel_hit || attack.category == MoveCategory::CloseRange {
        HitOutcome::Pixel
    } else if box_hit {
        HitOutcome::Box
    } else {
        HitOutcome::None
    }
}

fn draw_defender(image: &mut DebugImage, placement: &SpritePlacement, sprite: &SpriteMask) {
    let margin = CombatConfig::DEBUG_MARGIN;
    let bounds = placement.bounds;
    image.clear();
    image.rect(
        bounds.x + margin,
        bounds.y + margin,
        bounds.width,
        bounds.height,
        Color::BOX,
    );
    for (x, y) in sprite.solid_pixels() {
        plot(image, placement.to_world(x, y), Color::GHOST);
    }
}

fn plot(image: &mut DebugImage, world: Position, color: Color) {
    let margin = CombatConfig::DEBUG_MARGIN;
    image.set_pixel(world.x + margin, world.y + margin, color);
}
