//! Duel scheduling.
//!
//! The [`CombatEngine`] is the per-tick driver for a [`Duel`]. Every tick
//! follows the same order: fighter one updates, fighter two updates, then
//! hits are resolved one → two and two → one. Both resolutions use the
//! positions and frames reached after both updates.

use tracing::{debug, trace};

use crate::combat::{HitOutcome, resolve_hit};
use crate::env::Renderer;
use crate::fighter::{Fighter, StateSet};
use crate::input::FighterAction;
use crate::types::{AnimationId, FighterSlot};

/// Outcome of one simulation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Tick number, starting at 1 for the first tick.
    pub tick: u64,

    /// Resolution result indexed by attacker slot.
    pub outcomes: [HitOutcome; 2],
}

impl TickReport {
    pub fn outcome(&self, attacker: FighterSlot) -> HitOutcome {
        self.outcomes[attacker.index()]
    }

    pub fn any_hit(&self) -> bool {
        self.outcomes.iter().any(|outcome| outcome.is_hit())
    }
}

/// Two fighters sharing an arena.
pub struct Duel {
    fighters: [Fighter; 2],
    tick: u64,
}

impl Duel {
    pub fn new(one: Fighter, two: Fighter) -> Self {
        Self {
            fighters: [one, two],
            tick: 0,
        }
    }

    pub fn fighter(&self, slot: FighterSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    pub fn fighter_mut(&mut self, slot: FighterSlot) -> &mut Fighter {
        &mut self.fighters[slot.index()]
    }

    /// The attacker and the defender for attacks from `attacker`.
    pub fn pair_mut(&mut self, attacker: FighterSlot) -> (&mut Fighter, &mut Fighter) {
        let [one, two] = &mut self.fighters;
        match attacker {
            FighterSlot::One => (one, two),
            FighterSlot::Two => (two, one),
        }
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// The fighter who defeated its opponent, once the round is decided.
    pub fn winner(&self) -> Option<FighterSlot> {
        [FighterSlot::One, FighterSlot::Two].into_iter().find(|&slot| {
            self.fighter(slot).state().is_in(StateSet::POST_VICTORY)
                && self.fighter(slot.opponent()).is_defeated()
        })
    }

    /// Draws both fighters and their children.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for fighter in &self.fighters {
            fighter.render(renderer);
        }
    }
}

/// Drives a [`Duel`] one tick at a time.
pub struct CombatEngine<'a> {
    duel: &'a mut Duel,
}

impl<'a> CombatEngine<'a> {
    pub fn new(duel: &'a mut Duel) -> Self {
        Self { duel }
    }

    /// Forwards a controller action to one fighter.
    pub fn act(&mut self, slot: FighterSlot, action: FighterAction) -> Option<AnimationId> {
        let triggered = self.duel.fighter_mut(slot).act(action);
        if let Some(id) = triggered {
            debug!(fighter = %slot, %action, move_id = %id, "move triggered");
        }
        triggered
    }

    /// Runs one simulation tick.
    pub fn step(&mut self) -> TickReport {
        self.duel.tick += 1;
        let tick = self.duel.tick;

        for fighter in &mut self.duel.fighters {
            fighter.tick();
        }

        let mut outcomes = [HitOutcome::None; 2];
        for attacker in [FighterSlot::One, FighterSlot::Two] {
            let (offense, defense) = self.duel.pair_mut(attacker);
            let outcome = resolve_hit(offense, defense);
            if outcome != HitOutcome::None {
                debug!(tick, attacker = %attacker, ?outcome, "hit resolved");
            }
            outcomes[attacker.index()] = outcome;
        }

        trace!(tick, ?outcomes, "tick complete");
        TickReport { tick, outcomes }
    }

    /// Runs `ticks` ticks, stopping early once the round is decided.
    pub fn run(&mut self, ticks: u64) -> Vec<TickReport> {
        let mut reports = Vec::new();
        for _ in 0..ticks {
            reports.push(self.step());
            if self.duel.winner().is_some() {
                break;
            }
        }
        reports
    }
}
