use std::path::PathBuf;

use combat_content::{ContentFactory, FighterArchetype};
use combat_core::mock::{MockAnimationEngine, MockPhysics};
use combat_core::{
    AnimationId, CombatEngine, Duel, Facing, Fighter, FighterAction, FighterSlot, HitOutcome,
    MoveCategory, Position,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

fn jaguar(slot: FighterSlot, x: i32, facing: Facing) -> Fighter {
    let setup = factory()
        .fighter_setup(slot, FighterArchetype::Jaguar, Position::new(x, 190), facing)
        .expect("jaguar content loads");
    Fighter::new(
        setup,
        Box::new(MockPhysics::new()),
        Box::new(MockAnimationEngine::new()),
    )
    .expect("jaguar table is complete")
}

#[test]
fn bundled_table_holds_base_animations_and_moves() {
    let moves = factory().load_moves(FighterArchetype::Jaguar).unwrap();
    for id in AnimationId::REQUIRED {
        assert!(moves.contains(id), "missing {id}");
    }
    assert_eq!(moves.get(AnimationId(21)).unwrap().category, MoveCategory::CloseRange);
    assert_eq!(moves.iter().filter(|m| m.is_triggerable()).count(), 7);
}

#[test]
fn bundled_config_matches_defaults() {
    let config = factory().load_config().unwrap();
    assert_eq!(config, combat_core::CombatConfig::default());
}

#[test]
fn archetype_without_table_fails_to_load() {
    assert!(factory().load_moves(FighterArchetype::Chronos).is_err());
}

#[test]
fn jaguar_mirror_match_jab_connects() {
    let mut duel = Duel::new(
        jaguar(FighterSlot::One, 100, Facing::Right),
        jaguar(FighterSlot::Two, 105, Facing::Left),
    );
    let mut engine = CombatEngine::new(&mut duel);

    assert_eq!(engine.act(FighterSlot::One, FighterAction::Punch), Some(AnimationId(20)));
    let report = engine.step();
    assert_eq!(report.outcome(FighterSlot::One), HitOutcome::Pixel);
    assert_eq!(report.outcome(FighterSlot::Two), HitOutcome::None);

    let defender = duel.fighter(FighterSlot::Two);
    assert_eq!(defender.health(), 490);
    assert_eq!(defender.endurance(), 490);
    assert_eq!(defender.animation_id(), AnimationId::DAMAGE);
}
