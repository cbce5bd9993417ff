use std::collections::VecDeque;

use crate::types::AnimationId;

/// Notifications collaborators deliver to the fighter that owns them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CombatEvent {
    // ===== physics =====
    /// Upward motion ended and the body started falling.
    Fall,
    /// The body touched the floor.
    FloorHit { flight_mode: bool },
    /// Horizontal motion halted.
    Stop,
    /// A jump started.
    Jump,
    /// Horizontal motion started.
    Move,
    Crouch,

    // ===== animation =====
    /// Spawn a child animation offset from the fighter.
    Spawn {
        animation: AnimationId,
        offset_x: i32,
        offset_y: i32,
    },
    /// The first live child playing `animation` is done.
    Release { animation: AnimationId },
    /// Apply a recoil impulse to the fighter's body.
    Recoil { impulse_x: f32, impulse_y: f32 },
}

/// Receives [`CombatEvent`]s from collaborators.
pub trait CombatEventSink {
    fn emit(&mut self, event: CombatEvent);
}

/// FIFO sink a fighter hands to its collaborators and drains afterwards.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: VecDeque<CombatEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> Option<CombatEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CombatEventSink for EventQueue {
    fn emit(&mut self, event: CombatEvent) {
        self.events.push_back(event);
    }
}

impl From<CombatEvent> for EventQueue {
    fn from(event: CombatEvent) -> Self {
        let mut queue = Self::new();
        queue.emit(event);
        queue
    }
}
