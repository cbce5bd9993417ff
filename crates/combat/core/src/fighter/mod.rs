//! The fighter entity and its combat state machine.
//!
//! A [`Fighter`] owns its physics body, its animation instances and its
//! input history. All state changes flow through three entry points:
//! [`Fighter::act`] for controller input, [`Fighter::on_event`] (and the
//! per-tick [`Fighter::tick`]) for collaborator reports, and
//! [`Fighter::apply_damage`] for hits resolved by
//! [`resolve_hit`](crate::combat::resolve_hit).

mod children;
mod events;
mod state;

pub use children::{ChildArena, ChildId};
pub use events::{CombatEvent, CombatEventSink, EventQueue};
pub use state::{CombatState, Legality, StateSet, check_move};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::combat::{DamageEffect, DebugImage, Vitals, damage};
use crate::config::CombatConfig;
use crate::env::{AnimationEngine, AnimationPlayer, PhysicsBody, Renderer};
use crate::error::LoadError;
use crate::input::{FighterAction, InputBuffer, InputSymbol, find_match};
use crate::moves::{MoveCategory, MoveDefinition, MoveTable, SpriteMask};
use crate::types::{AnimationId, Facing, FighterSlot, Position};

/// Everything needed to put a fighter into a round.
#[derive(Clone, Debug)]
pub struct FighterSetup {
    pub slot: FighterSlot,
    pub moves: Arc<MoveTable>,
    pub position: Position,
    pub facing: Facing,
    pub config: CombatConfig,
}

impl FighterSetup {
    pub fn new(
        slot: FighterSlot,
        moves: Arc<MoveTable>,
        position: Position,
        facing: Facing,
    ) -> Self {
        Self {
            slot,
            moves,
            position,
            facing,
            config: CombatConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }
}

/// A fighter taking part in a duel.
pub struct Fighter {
    slot: FighterSlot,
    config: CombatConfig,
    moves: Arc<MoveTable>,
    physics: Box<dyn PhysicsBody>,
    animations: Box<dyn AnimationEngine>,
    player: Box<dyn AnimationPlayer>,
    children: ChildArena,
    state: CombatState,
    facing: Facing,
    vitals: Vitals,
    input: InputBuffer,
    /// Set by the proximity rule during collision resolution.
    close: bool,
    steps: u32,
    pub(crate) debug: Option<DebugImage>,
}

impl Fighter {
    /// Assembles a fighter standing idle at `setup.position`.
    ///
    /// # Errors
    ///
    /// Fails if the move table lacks a base animation the state machine
    /// falls back to; no fighter is created in that case.
    pub fn new(
        setup: FighterSetup,
        mut physics: Box<dyn PhysicsBody>,
        mut animations: Box<dyn AnimationEngine>,
    ) -> Result<Self, LoadError> {
        let FighterSetup {
            slot,
            moves,
            position,
            facing,
            config,
        } = setup;

        moves.validate()?;
        let idle = moves
            .get(AnimationId::IDLE)
            .ok_or(LoadError::MissingAnimation(AnimationId::IDLE))?;

        physics.set_position(position);
        let mut player = animations.create(AnimationId::IDLE, &idle.frames, position);
        player.set_facing(facing);
        player.set_repeat(true);

        debug!(fighter = %slot, moves = moves.len(), %position, "fighter loaded");

        Ok(Self {
            slot,
            vitals: Vitals::new(config.health_max, config.endurance_max),
            config,
            moves,
            physics,
            animations,
            player,
            children: ChildArena::new(),
            state: CombatState::Standing,
            facing,
            input: InputBuffer::new(),
            close: false,
            steps: 0,
            debug: None,
        })
    }

    // ===== queries =====

    pub fn slot(&self) -> FighterSlot {
        self.slot
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn state(&self) -> CombatState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn health(&self) -> u32 {
        self.vitals.health
    }

    pub fn endurance(&self) -> u32 {
        self.vitals.endurance
    }

    /// Health and endurance are both gone; the fighter has lost the round.
    pub fn is_defeated(&self) -> bool {
        self.vitals.is_depleted()
    }

    pub fn position(&self) -> Position {
        self.physics.position()
    }

    pub fn is_in_air(&self) -> bool {
        self.physics.is_in_air()
    }

    pub fn is_close(&self) -> bool {
        self.close
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn moves(&self) -> &MoveTable {
        &self.moves
    }

    pub fn animation(&self) -> &dyn AnimationPlayer {
        self.player.as_ref()
    }

    pub fn animation_id(&self) -> AnimationId {
        self.player.id()
    }

    /// The move whose animation is currently playing.
    pub fn current_move(&self) -> Option<&MoveDefinition> {
        self.moves.get(self.player.id())
    }

    /// Sprite mask of the frame currently displayed.
    pub fn current_sprite(&self) -> Option<&SpriteMask> {
        let index = self.player.sprite_index()?;
        self.current_move()?.frames.sprite(index)
    }

    pub fn children(&self) -> &ChildArena {
        &self.children
    }

    pub fn debug_image(&self) -> Option<&DebugImage> {
        self.debug.as_ref()
    }

    pub fn debug_image_mut(&mut self) -> Option<&mut DebugImage> {
        self.debug.as_mut()
    }

    /// Starts drawing this fighter's attacks into a collision debug image.
    pub fn enable_collision_debug(&mut self) {
        self.debug.get_or_insert_with(DebugImage::default);
    }

    pub fn disable_collision_debug(&mut self) {
        self.debug = None;
    }

    // ===== input =====

    /// Applies a controller action and tries to trigger a move.
    ///
    /// Ignored while defeated, and while a non-looping move is playing
    /// unless the fighter is in `Victory` or `Scrap`. Returns the triggered
    /// move, if any.
    pub fn act(&mut self, action: FighterAction) -> Option<AnimationId> {
        if self.is_defeated() {
            return None;
        }
        let interruptible = self.player.id().is_idle_family()
            || matches!(self.state, CombatState::Victory | CombatState::Scrap);
        if !interruptible {
            return None;
        }

        let mobile = !self.state.is_in(StateSet::POST_VICTORY);
        let mut events = EventQueue::new();
        match action {
            FighterAction::WalkLeft if mobile => {
                self.physics.walk(-self.config.walk_speed, &mut events);
            }
            FighterAction::WalkRight if mobile => {
                self.physics.walk(self.config.walk_speed, &mut events);
            }
            FighterAction::Crouch if mobile => self.physics.crouch(&mut events),
            FighterAction::Jump if mobile => {
                self.physics.jump(self.config.jump_velocity, &mut events);
            }
            FighterAction::Stop if mobile => self.physics.walk(0.0, &mut events),
            _ => {}
        }
        self.dispatch(events);

        if let Some(symbol) = action.symbol(self.facing) {
            self.record_symbol(symbol);
        }
        self.try_match()
    }

    /// Records a symbol into the input history; repeats of the head are
    /// dropped.
    pub fn record_symbol(&mut self, symbol: InputSymbol) -> bool {
        self.input.record(symbol)
    }

    /// Triggers the first legal move matching the input history.
    ///
    /// On a match the fighter halts, switches straight to the move's
    /// animation and forgets its input history.
    pub fn try_match(&mut self) -> Option<AnimationId> {
        let moves = Arc::clone(&self.moves);
        let Self {
            slot,
            input,
            state,
            close,
            ..
        } = self;
        let found = find_match(&moves, input, |definition| {
            let legality = check_move(*state, definition.category, *close);
            if legality.allowed && legality.next_state != *state {
                debug!(
                    fighter = %slot,
                    from = %state,
                    to = %legality.next_state,
                    "state transition"
                );
                *state = legality.next_state;
            }
            legality.allowed
        })?;

        debug!(
            fighter = %self.slot,
            move_id = %found.id,
            sequence = %found.input,
            input = %self.input,
            "matched move"
        );

        let mut events = EventQueue::new();
        self.physics.walk(0.0, &mut events);
        self.dispatch(events);

        self.switch_animation(found.id, false);
        self.input.clear();
        Some(found.id)
    }

    /// Checks a move category against the current state, applying the
    /// finishing-move transition when it passes.
    pub fn move_allowed(&mut self, category: MoveCategory) -> bool {
        let legality = check_move(self.state, category, self.close);
        if legality.allowed {
            self.transition(legality.next_state);
        }
        legality.allowed
    }

    /// Turns the fighter. A move in progress keeps its facing.
    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
        if self.player.id().is_idle_family() {
            self.player.set_facing(facing);
        }
    }

    // ===== collaborator events =====

    /// Handles a report from the physics body or an animation.
    pub fn on_event(&mut self, event: CombatEvent) {
        self.dispatch(EventQueue::from(event));
    }

    fn dispatch(&mut self, mut events: EventQueue) {
        while let Some(event) = events.next() {
            self.handle(event, &mut events);
        }
    }

    fn handle(&mut self, event: CombatEvent, events: &mut EventQueue) {
        let defeated = self.is_defeated();
        match event {
            CombatEvent::Fall => {
                if self.state == CombatState::Jumping {
                    self.player.next_frame();
                }
            }
            CombatEvent::FloorHit { .. } => {
                self.player.finish();
                match self.state {
                    CombatState::Jumping => self.transition(CombatState::Standing),
                    CombatState::Recoil if !defeated => {
                        self.switch_animation(AnimationId::STANDUP, false);
                        self.physics.walk(0.0, events);
                    }
                    _ => {}
                }
            }
            CombatEvent::Stop => {
                if !defeated && !self.state.is_in(StateSet::STANDING | StateSet::LOCKED) {
                    self.transition(CombatState::Standing);
                    self.switch_animation(AnimationId::IDLE, true);
                }
            }
            CombatEvent::Jump => {
                if !defeated && self.state.is_in(StateSet::GROUNDED) {
                    self.transition(CombatState::Jumping);
                    self.switch_animation(AnimationId::JUMPING, false);
                }
            }
            CombatEvent::Move => {
                if !defeated && !self.state.is_in(StateSet::LOCKED) {
                    self.transition(CombatState::Walking);
                    self.switch_animation(AnimationId::WALKING, true);
                }
            }
            CombatEvent::Crouch => {
                if !defeated && !self.state.is_in(StateSet::CROUCHING | StateSet::LOCKED) {
                    self.transition(CombatState::Crouching);
                    self.switch_animation(AnimationId::CROUCHING, false);
                }
            }
            CombatEvent::Spawn {
                animation,
                offset_x,
                offset_y,
            } => {
                self.spawn_child(animation, offset_x, offset_y);
            }
            CombatEvent::Release { animation } => {
                if self.children.release(animation).is_none() {
                    warn!(fighter = %self.slot, %animation, "no live child to release");
                }
            }
            CombatEvent::Recoil {
                impulse_x,
                impulse_y,
            } => {
                debug!(fighter = %self.slot, impulse_x, impulse_y, "recoil impulse");
                self.physics.recoil(impulse_x, impulse_y, events);
            }
        }
    }

    // ===== damage =====

    /// Takes a hit of `amount`, splitting it across health and endurance.
    ///
    /// The hit reaction replaces whatever animation was playing: defeat
    /// when both pools are empty, stun when only endurance is, otherwise
    /// the damage animation (showing `footer`) and the `Recoil` state.
    pub fn apply_damage(&mut self, amount: u32, footer: Option<&str>) -> DamageEffect {
        let (vitals, effect) = damage::apply_damage(self.vitals, amount);
        self.vitals = vitals;
        debug!(
            fighter = %self.slot,
            amount,
            health = vitals.health,
            endurance = vitals.endurance,
            ?effect,
            "took damage"
        );

        match effect {
            DamageEffect::Defeated => {
                if self.player.id() != AnimationId::DEFEAT {
                    self.switch_animation(AnimationId::DEFEAT, false);
                }
            }
            DamageEffect::Stunned => {
                self.switch_animation(AnimationId::STUNNED, false);
            }
            DamageEffect::Recoil => {
                if self.switch_animation(AnimationId::DAMAGE, false) {
                    if let Some(text) = footer {
                        self.player.set_display_string(text);
                    }
                }
                self.transition(CombatState::Recoil);
            }
        }
        effect
    }

    /// Marks this fighter as the winner of the round.
    pub(crate) fn enter_victory(&mut self) {
        self.transition(CombatState::Victory);
        self.switch_animation(AnimationId::VICTORY, false);
    }

    pub(crate) fn clear_close(&mut self) {
        self.close = false;
    }

    /// Stops the fighter at `x` in front of its opponent and flags it close.
    pub(crate) fn hold_close(&mut self, x: i32) {
        let position = self.physics.position();
        self.physics.set_position(Position::new(x, position.y));
        self.close = true;
    }

    // ===== children =====

    /// Spawns a child animation at the fighter's position plus the
    /// animation's start offset plus `(offset_x, offset_y)`.
    pub fn spawn_child(
        &mut self,
        animation: AnimationId,
        offset_x: i32,
        offset_y: i32,
    ) -> Option<ChildId> {
        let Some(definition) = self.moves.get(animation) else {
            warn!(fighter = %self.slot, %animation, "child animation missing from move table");
            return None;
        };
        let origin = self.physics.position().offset(
            definition.frames.start_x + offset_x,
            definition.frames.start_y + offset_y,
        );
        let mut player = self.animations.create(animation, &definition.frames, origin);
        player.set_facing(self.facing);
        let Some(id) = self.children.insert(player) else {
            warn!(fighter = %self.slot, %animation, "child arena is full");
            return None;
        };
        debug!(fighter = %self.slot, %animation, child = %id, %origin, "spawned child");
        Some(id)
    }

    /// Flags a spawned child as finished; it is dropped on the next tick.
    pub fn mark_finished(&mut self, id: ChildId) -> bool {
        let marked = self.children.mark_finished(id);
        if !marked {
            warn!(fighter = %self.slot, child = %id, "unknown child marked finished");
        }
        marked
    }

    // ===== per-tick update =====

    /// Advances the fighter by one simulation tick.
    ///
    /// Children run every tick; physics and the main animation run once
    /// every `step_interval` ticks.
    pub fn tick(&mut self) {
        let position = self.physics.position();
        let lift = if self.physics.is_in_air() {
            self.config.air_sprite_lift
        } else {
            0
        };
        self.player.set_position(position.offset(0, -lift));

        let mut events = EventQueue::new();
        self.children.run(&mut events);
        self.dispatch(events);

        self.steps += 1;
        if self.steps >= self.config.step_interval {
            self.steps = 0;

            let mut events = EventQueue::new();
            self.physics.step(&mut events);
            self.dispatch(events);

            let mut events = EventQueue::new();
            self.player.run(&mut events);
            self.dispatch(events);

            self.regenerate();
        }

        if self.player.is_finished() {
            self.settle();
        }

        let swept = self.children.sweep();
        if swept > 0 {
            debug!(fighter = %self.slot, swept, "removed finished children");
        }
    }

    /// Draws live children, then the fighter itself.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.children.render(renderer);
        renderer.draw(self.player.as_ref());
    }

    fn regenerate(&mut self) {
        if self.is_defeated()
            || self.vitals.endurance >= self.config.endurance_max
            || !self.player.id().is_idle_family()
        {
            return;
        }
        self.vitals.endurance = self
            .vitals
            .endurance
            .saturating_add(self.config.endurance_regen)
            .min(self.config.endurance_max);
    }

    /// Picks the follow-up animation once the current one has finished.
    fn settle(&mut self) {
        if self.is_defeated() {
            return;
        }
        if self.state == CombatState::Recoil {
            self.transition(CombatState::Standing);
        }
        self.steps = 0;
        let next = match self.state {
            CombatState::Crouching => AnimationId::CROUCHING,
            CombatState::Scrap | CombatState::Destruction => AnimationId::VICTORY,
            _ => AnimationId::IDLE,
        };
        self.switch_animation(next, true);
    }

    fn transition(&mut self, next: CombatState) {
        if self.state != next {
            debug!(fighter = %self.slot, from = %self.state, to = %next, "state transition");
            self.state = next;
        }
    }

    /// Replaces the main animation; returns false if the table lacks `id`.
    fn switch_animation(&mut self, id: AnimationId, repeat: bool) -> bool {
        let Some(definition) = self.moves.get(id) else {
            warn!(fighter = %self.slot, animation = %id, "animation missing from move table");
            return false;
        };
        let mut player = self
            .animations
            .create(id, &definition.frames, self.player.position());
        player.set_facing(self.facing);
        player.set_repeat(repeat);
        self.player = player;
        debug!(fighter = %self.slot, animation = %id, repeat, "switched animation");
        true
    }
}
