//! In-memory collaborators for testing without an engine.
//!
//! [`MockPhysics`] integrates a single body with constant gravity,
//! [`MockAnimation`] steps through a fixed number of frames and can replay
//! scripted events, and [`MoveTableBuilder`] produces tables that satisfy
//! fighter validation.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::config::CombatConfig;
use crate::env::{AnimationEngine, AnimationPlayer, PhysicsBody, Renderer};
use crate::fighter::{CombatEvent, CombatEventSink, Fighter, FighterSetup};
use crate::moves::{
    AnimationFrames, CollisionPoint, InputSequence, MoveCategory, MoveDefinition, MoveTable,
    SpriteMask,
};
use crate::types::{AnimationId, Facing, FighterSlot, Position};

// ===== physics =====

/// Snapshot of a [`MockPhysics`] body.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyState {
    pub position: Position,
    pub floor: i32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub in_air: bool,
    pub crouched: bool,
}

/// Mock physics body.
///
/// Clones share the same body, so a test can keep a handle after boxing one
/// into a fighter.
#[derive(Clone, Debug, Default)]
pub struct MockPhysics {
    body: Arc<Mutex<BodyState>>,
}

impl MockPhysics {
    pub const GRAVITY: f32 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BodyState {
        *self.body.lock().unwrap()
    }

    fn with<R>(&self, f: impl FnOnce(&mut BodyState) -> R) -> R {
        let mut body = self.body.lock().unwrap();
        f(&mut *body)
    }
}

impl PhysicsBody for MockPhysics {
    fn position(&self) -> Position {
        self.state().position
    }

    fn set_position(&mut self, position: Position) {
        self.with(|body| {
            body.position = position;
            if !body.in_air {
                body.floor = position.y;
            }
        });
    }

    fn is_in_air(&self) -> bool {
        self.state().in_air
    }

    fn walk(&mut self, velocity_x: f32, events: &mut dyn CombatEventSink) {
        let event = self.with(|body| {
            let was_moving = body.velocity_x != 0.0 || body.crouched;
            let was_still = body.velocity_x == 0.0;
            body.velocity_x = velocity_x;
            if body.in_air {
                return None;
            }
            if velocity_x == 0.0 {
                body.crouched = false;
                was_moving.then_some(CombatEvent::Stop)
            } else {
                body.crouched = false;
                was_still.then_some(CombatEvent::Move)
            }
        });
        if let Some(event) = event {
            events.emit(event);
        }
    }

    fn jump(&mut self, velocity_y: f32, events: &mut dyn CombatEventSink) {
        let jumped = self.with(|body| {
            if body.in_air {
                return false;
            }
            body.in_air = true;
            body.crouched = false;
            body.velocity_y = velocity_y;
            true
        });
        if jumped {
            events.emit(CombatEvent::Jump);
        }
    }

    fn crouch(&mut self, events: &mut dyn CombatEventSink) {
        let crouched = self.with(|body| {
            if body.in_air || body.crouched {
                return false;
            }
            body.crouched = true;
            body.velocity_x = 0.0;
            true
        });
        if crouched {
            events.emit(CombatEvent::Crouch);
        }
    }

    fn recoil(&mut self, impulse_x: f32, impulse_y: f32, events: &mut dyn CombatEventSink) {
        self.with(|body| {
            body.velocity_x = impulse_x;
            body.velocity_y = impulse_y;
            if impulse_y < 0.0 {
                body.in_air = true;
            }
        });
        self.step(events);
    }

    fn step(&mut self, events: &mut dyn CombatEventSink) {
        let reported = self.with(|body| {
            let mut reported = Vec::new();
            body.position.x += body.velocity_x.round() as i32;
            if !body.in_air {
                return reported;
            }
            let rising = body.velocity_y < 0.0;
            body.position.y += body.velocity_y.round() as i32;
            body.velocity_y += Self::GRAVITY;
            if rising && body.velocity_y >= 0.0 {
                reported.push(CombatEvent::Fall);
            }
            if body.position.y >= body.floor {
                body.position.y = body.floor;
                body.in_air = false;
                body.velocity_y = 0.0;
                reported.push(CombatEvent::FloorHit { flight_mode: false });
            }
            reported
        });
        for event in reported {
            events.emit(event);
        }
    }
}

// ===== animation =====

/// Mock animation instance with a fixed frame count.
#[derive(Clone, Debug)]
pub struct MockAnimation {
    id: AnimationId,
    frame: u32,
    frame_count: u32,
    sprite_count: u32,
    repeat: bool,
    finished: bool,
    ready: bool,
    facing: Facing,
    position: Position,
    display: Option<String>,
    display_log: Arc<Mutex<Vec<(AnimationId, String)>>>,
    script: Vec<(u32, CombatEvent)>,
}

impl MockAnimation {
    pub fn new(id: AnimationId, frame_count: u32) -> Self {
        Self {
            id,
            frame: 0,
            frame_count: frame_count.max(1),
            sprite_count: 1,
            repeat: false,
            finished: false,
            ready: true,
            facing: Facing::Right,
            position: Position::ORIGIN,
            display: None,
            display_log: Arc::default(),
            script: Vec::new(),
        }
    }

    /// Emits `event` each time frame `frame` is played.
    pub fn with_event(mut self, frame: u32, event: CombatEvent) -> Self {
        self.script.push((frame, event));
        self
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn display(&self) -> Option<&str> {
        self.display.as_deref()
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat
    }
}

impl AnimationPlayer for MockAnimation {
    fn id(&self) -> AnimationId {
        self.id
    }

    fn frame_index(&self) -> u32 {
        self.frame
    }

    fn frame_letter(&self) -> Option<char> {
        (self.sprite_count > 0).then(|| (b'A' + (self.frame % self.sprite_count) as u8) as char)
    }

    fn is_frame_ready(&self) -> bool {
        self.ready
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) {
        self.finished = true;
    }

    fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    fn position(&self) -> Position {
        self.position
    }

    fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    fn set_display_string(&mut self, text: &str) {
        self.display = Some(text.to_owned());
        self.display_log.lock().unwrap().push((self.id, text.to_owned()));
    }

    fn next_frame(&mut self) {
        if self.frame + 1 < self.frame_count {
            self.frame += 1;
        }
    }

    fn run(&mut self, events: &mut dyn CombatEventSink) {
        if self.finished {
            return;
        }
        for (_, event) in self.script.iter().filter(|(frame, _)| *frame == self.frame) {
            events.emit(*event);
        }
        if self.frame + 1 < self.frame_count {
            self.frame += 1;
        } else if self.repeat {
            self.frame = 0;
        } else {
            self.finished = true;
        }
    }
}

/// Creates [`MockAnimation`]s.
///
/// Frame counts default to the number of sprites of the animation.
#[derive(Clone, Debug, Default)]
pub struct MockAnimationEngine {
    frame_counts: HashMap<AnimationId, u32>,
    scripts: HashMap<AnimationId, Vec<(u32, CombatEvent)>>,
    pending: HashSet<AnimationId>,
    created: Arc<Mutex<Vec<AnimationId>>>,
    displayed: Arc<Mutex<Vec<(AnimationId, String)>>>,
}

impl MockAnimationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_count(mut self, id: AnimationId, frames: u32) -> Self {
        self.frame_counts.insert(id, frames);
        self
    }

    pub fn with_event(mut self, id: AnimationId, frame: u32, event: CombatEvent) -> Self {
        self.scripts.entry(id).or_default().push((frame, event));
        self
    }

    /// Instances of `id` report their frames as still decoding.
    pub fn with_pending(mut self, id: AnimationId) -> Self {
        self.pending.insert(id);
        self
    }

    /// Every animation created so far, shared between clones.
    pub fn created(&self) -> Vec<AnimationId> {
        self.created.lock().unwrap().clone()
    }

    /// Every display string attached to a created animation, in order.
    pub fn displayed(&self) -> Vec<(AnimationId, String)> {
        self.displayed.lock().unwrap().clone()
    }
}

impl AnimationEngine for MockAnimationEngine {
    fn create(
        &mut self,
        id: AnimationId,
        frames: &AnimationFrames,
        position: Position,
    ) -> Box<dyn AnimationPlayer> {
        self.created.lock().unwrap().push(id);
        let sprite_count = frames.sprites.len() as u32;
        let frame_count = self
            .frame_counts
            .get(&id)
            .copied()
            .unwrap_or(sprite_count);
        let mut player = MockAnimation::new(id, frame_count);
        player.sprite_count = sprite_count;
        player.position = position;
        player.ready = !self.pending.contains(&id);
        player.display_log = Arc::clone(&self.displayed);
        if let Some(script) = self.scripts.get(&id) {
            player.script = script.clone();
        }
        Box::new(player)
    }
}

// ===== rendering =====

#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pub drawn: Vec<AnimationId>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, player: &dyn AnimationPlayer) {
        self.drawn.push(player.id());
    }
}

// ===== move tables =====

/// Builds move tables holding every base animation.
#[derive(Clone, Debug)]
pub struct MoveTableBuilder {
    moves: Vec<MoveDefinition>,
}

impl MoveTableBuilder {
    pub fn new() -> Self {
        let moves = AnimationId::REQUIRED
            .iter()
            .map(|&id| MoveDefinition::animation(id, Self::frames()))
            .collect();
        Self { moves }
    }

    /// A fully solid 20x40 sprite standing on its owner's position.
    pub fn body_sprite() -> SpriteMask {
        SpriteMask::new(-10, -40, 20, 40, vec![1; 800])
    }

    fn frames() -> AnimationFrames {
        AnimationFrames {
            sprites: vec![Self::body_sprite()],
            ..AnimationFrames::default()
        }
    }

    fn entry(&mut self, id: AnimationId) -> &mut MoveDefinition {
        let index = match self.moves.iter().position(|definition| definition.id == id) {
            Some(index) => index,
            None => {
                self.moves.push(MoveDefinition::animation(id, Self::frames()));
                self.moves.len() - 1
            }
        };
        &mut self.moves[index]
    }

    pub fn with_move(
        mut self,
        id: AnimationId,
        input: &str,
        category: MoveCategory,
        damage: u32,
    ) -> Self {
        let input = InputSequence::parse(id, input).expect("mock input sequence");
        let entry = self.entry(id);
        entry.input = input;
        entry.category = category;
        entry.damage = damage;
        self
    }

    /// Adds an animation-only slot, e.g. a projectile.
    pub fn with_animation(mut self, id: AnimationId, start_x: i32, start_y: i32) -> Self {
        let entry = self.entry(id);
        entry.frames.start_x = start_x;
        entry.frames.start_y = start_y;
        self
    }

    pub fn with_sprite(self, id: AnimationId, sprite: SpriteMask) -> Self {
        self.with_sprites(id, vec![sprite])
    }

    pub fn with_sprites(mut self, id: AnimationId, sprites: Vec<SpriteMask>) -> Self {
        self.entry(id).frames.sprites = sprites;
        self
    }

    pub fn with_collision(mut self, id: AnimationId, points: Vec<CollisionPoint>) -> Self {
        self.entry(id).frames.collision = points;
        self
    }

    pub fn with_footer(mut self, id: AnimationId, footer: &str) -> Self {
        self.entry(id).footer = Some(footer.to_owned());
        self
    }

    pub fn build(self) -> MoveTable {
        MoveTable::from_moves(self.moves).expect("mock move table")
    }
}

impl Default for MoveTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fighter wired to fresh mock collaborators.
pub fn mock_fighter(
    slot: FighterSlot,
    moves: Arc<MoveTable>,
    position: Position,
    facing: Facing,
    config: CombatConfig,
) -> Fighter {
    let setup = FighterSetup::new(slot, moves, position, facing).with_config(config);
    Fighter::new(
        setup,
        Box::new(MockPhysics::new()),
        Box::new(MockAnimationEngine::new()),
    )
    .expect("mock fighter")
}
