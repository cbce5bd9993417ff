//! Secondary animation instances (projectiles, effects) owned by a fighter.

use core::fmt;

use crate::env::{AnimationPlayer, Renderer};
use crate::fighter::EventQueue;
use crate::types::AnimationId;

/// Stable handle of a spawned child animation.
///
/// Slots are reused after a sweep; the generation makes a stale handle miss
/// instead of addressing the slot's new occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChildId {
    index: u16,
    generation: u16,
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

struct Child {
    player: Box<dyn AnimationPlayer>,
    finished: bool,
}

impl Child {
    fn is_done(&self) -> bool {
        self.finished || self.player.is_finished()
    }
}

#[derive(Default)]
struct Slot {
    generation: u16,
    child: Option<Child>,
}

/// Arena of child animations, indexed by [`ChildId`].
#[derive(Default)]
pub struct ChildArena {
    slots: Vec<Slot>,
    /// Swept slots, reused last-freed first.
    free: Vec<u16>,
}

impl ChildArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a running child and returns its handle, or `None` when every
    /// addressable slot is taken.
    pub fn insert(&mut self, player: Box<dyn AnimationPlayer>) -> Option<ChildId> {
        let index = match self.free.pop() {
            Some(index) => index,
            None => {
                let index = u16::try_from(self.slots.len()).ok()?;
                self.slots.push(Slot::default());
                index
            }
        };
        let slot = &mut self.slots[usize::from(index)];
        slot.child = Some(Child {
            player,
            finished: false,
        });
        Some(ChildId {
            index,
            generation: slot.generation,
        })
    }

    fn child_mut(&mut self, id: ChildId) -> Option<&mut Child> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.child.as_mut())
    }

    /// Flags a child as finished. Returns false for unknown or stale handles.
    pub fn mark_finished(&mut self, id: ChildId) -> bool {
        match self.child_mut(id) {
            Some(child) => {
                child.finished = true;
                true
            }
            None => false,
        }
    }

    /// Flags the first live child playing `animation` as finished.
    pub fn release(&mut self, animation: AnimationId) -> Option<ChildId> {
        self.slots
            .iter_mut()
            .zip(0..=u16::MAX)
            .find_map(|(slot, index)| {
                let child = slot.child.as_mut()?;
                if child.finished || child.player.id() != animation {
                    return None;
                }
                child.finished = true;
                Some(ChildId {
                    index,
                    generation: slot.generation,
                })
            })
    }

    /// Returns the live child for `id`, if it has not been swept yet.
    pub fn get(&self, id: ChildId) -> Option<&dyn AnimationPlayer> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.child.as_ref())
            .map(|child| child.player.as_ref())
    }

    pub fn is_finished(&self, id: ChildId) -> Option<bool> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.child.as_ref())
            .map(Child::is_done)
    }

    /// Advances every child that is not finished.
    pub fn run(&mut self, events: &mut EventQueue) {
        for child in self.slots.iter_mut().filter_map(|slot| slot.child.as_mut()) {
            if !child.is_done() {
                child.player.run(events);
            }
        }
    }

    /// Draws every child that is not finished.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for child in self.slots.iter().filter_map(|slot| slot.child.as_ref()) {
            if !child.is_done() {
                renderer.draw(child.player.as_ref());
            }
        }
    }

    /// Drops finished children and returns how many were removed.
    pub fn sweep(&mut self) -> usize {
        let mut removed = 0;
        for (slot, index) in self.slots.iter_mut().zip(0..=u16::MAX) {
            if slot.child.as_ref().is_some_and(Child::is_done) {
                slot.child = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
                removed += 1;
            }
        }
        removed
    }

    /// Number of children currently stored, finished or not.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.child.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over children that are still playing.
    pub fn live(&self) -> impl Iterator<Item = &dyn AnimationPlayer> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.child.as_ref())
            .filter(|child| !child.is_done())
            .map(|child| child.player.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAnimation, RecordingRenderer};

    fn player(id: u8) -> Box<dyn AnimationPlayer> {
        Box::new(MockAnimation::new(AnimationId(id), 3))
    }

    fn spawn(arena: &mut ChildArena, id: u8) -> ChildId {
        arena.insert(player(id)).expect("free slot")
    }

    #[test]
    fn marking_by_handle_hides_child_until_swept() {
        let mut arena = ChildArena::new();
        let first = spawn(&mut arena, 30);
        let second = spawn(&mut arena, 31);

        assert!(arena.mark_finished(first));
        let mut renderer = RecordingRenderer::default();
        arena.render(&mut renderer);
        assert_eq!(renderer.drawn, vec![AnimationId(31)]);

        assert_eq!(arena.sweep(), 1);
        assert_eq!(arena.len(), 1);
        assert!(arena.get(first).is_none());
        assert!(arena.get(second).is_some());
    }

    #[test]
    fn stale_handles_miss_reused_slots() {
        let mut arena = ChildArena::new();
        let old = spawn(&mut arena, 30);
        arena.mark_finished(old);
        arena.sweep();

        let new = spawn(&mut arena, 32);
        assert_ne!(old, new);
        assert!(!arena.mark_finished(old));
        assert_eq!(arena.is_finished(new), Some(false));
    }

    #[test]
    fn release_marks_first_live_child_of_animation() {
        let mut arena = ChildArena::new();
        let a = spawn(&mut arena, 30);
        let b = spawn(&mut arena, 30);

        assert_eq!(arena.release(AnimationId(30)), Some(a));
        assert_eq!(arena.release(AnimationId(30)), Some(b));
        assert_eq!(arena.release(AnimationId(30)), None);
        assert_eq!(arena.live().count(), 0);
    }

    #[test]
    fn children_that_finish_on_their_own_are_swept() {
        let mut arena = ChildArena::new();
        let id = spawn(&mut arena, 30);
        let mut events = EventQueue::new();
        for _ in 0..3 {
            arena.run(&mut events);
        }

        assert_eq!(arena.is_finished(id), Some(true));
        assert_eq!(arena.sweep(), 1);
        assert!(arena.is_empty());
    }

    #[test]
    fn arena_refuses_children_past_its_handle_range() {
        let mut arena = ChildArena::new();
        for _ in 0..=u16::MAX {
            spawn(&mut arena, 30);
        }
        assert!(arena.insert(player(30)).is_none());
        assert_eq!(arena.len(), usize::from(u16::MAX) + 1);

        let first = ChildId {
            index: 0,
            generation: 0,
        };
        assert!(arena.mark_finished(first));
        arena.sweep();
        let reused = arena.insert(player(31)).expect("swept slot is free");
        assert_eq!(reused.index, 0);
        assert_eq!(reused.generation, 1);
    }
}
