use std::sync::Arc;

use combat_core::mock::{MockAnimationEngine, MockPhysics, MoveTableBuilder, RecordingRenderer};
use combat_core::{
    AnimationId, CollisionPoint, CombatConfig, CombatEngine, CombatEvent, CombatState, Duel,
    Facing, Fighter, FighterAction, FighterSetup, FighterSlot, HitOutcome, MoveCategory,
    MoveTable, Position,
};

const FIREBALL: AnimationId = AnimationId(20);
const JAB: AnimationId = AnimationId(21);
const THROW: AnimationId = AnimationId(22);
const AIR_KICK: AnimationId = AnimationId(23);
const SCRAP: AnimationId = AnimationId(30);
const PROJECTILE: AnimationId = AnimationId(40);

fn moves() -> Arc<MoveTable> {
    Arc::new(
        MoveTableBuilder::new()
            .with_move(FIREBALL, "P632", MoveCategory::Normal, 0)
            .with_move(THROW, "K", MoveCategory::CloseRange, 60)
            .with_move(JAB, "P", MoveCategory::Normal, 40)
            .with_collision(JAB, vec![CollisionPoint::new(12, -20, 0)])
            .with_footer(JAB, "JAB")
            .with_move(AIR_KICK, "K", MoveCategory::JumpOnly, 30)
            .with_move(SCRAP, "P8", MoveCategory::Scrap, 0)
            .with_animation(PROJECTILE, 5, -30)
            .build(),
    )
}

struct Corner {
    fighter: Fighter,
    body: MockPhysics,
}

fn corner(
    slot: FighterSlot,
    x: i32,
    facing: Facing,
    config: CombatConfig,
    animations: MockAnimationEngine,
) -> Corner {
    let body = MockPhysics::new();
    let setup = FighterSetup::new(slot, moves(), Position::new(x, 190), facing).with_config(config);
    let fighter = Fighter::new(setup, Box::new(body.clone()), Box::new(animations))
        .expect("fighter loads");
    Corner { fighter, body }
}

fn default_duel(one_x: i32, two_x: i32) -> Duel {
    let one = corner(
        FighterSlot::One,
        one_x,
        Facing::Right,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let two = corner(
        FighterSlot::Two,
        two_x,
        Facing::Left,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    Duel::new(one.fighter, two.fighter)
}

#[test]
fn mirrored_motion_input_triggers_same_move() {
    let mut duel = default_duel(100, 200);
    let mut engine = CombatEngine::new(&mut duel);

    for action in [FighterAction::Down, FighterAction::DownRight, FighterAction::Right] {
        assert_eq!(engine.act(FighterSlot::One, action), None);
    }
    assert_eq!(engine.act(FighterSlot::One, FighterAction::Punch), Some(FIREBALL));

    for action in [FighterAction::Down, FighterAction::DownLeft, FighterAction::Left] {
        assert_eq!(engine.act(FighterSlot::Two, action), None);
    }
    assert_eq!(engine.act(FighterSlot::Two, FighterAction::Punch), Some(FIREBALL));

    assert!(duel.fighter(FighterSlot::One).input().is_empty());
    assert!(duel.fighter(FighterSlot::Two).input().is_empty());
}

#[test]
fn spawned_projectile_lives_until_its_animation_ends() {
    let animations = MockAnimationEngine::new()
        .with_frame_count(PROJECTILE, 3)
        .with_event(
            FIREBALL,
            0,
            CombatEvent::Spawn {
                animation: PROJECTILE,
                offset_x: 10,
                offset_y: 0,
            },
        );
    let one = corner(
        FighterSlot::One,
        100,
        Facing::Right,
        CombatConfig::default(),
        animations,
    );
    let two = corner(
        FighterSlot::Two,
        300,
        Facing::Left,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let mut duel = Duel::new(one.fighter, two.fighter);
    let mut engine = CombatEngine::new(&mut duel);

    for action in [
        FighterAction::Down,
        FighterAction::DownRight,
        FighterAction::Right,
        FighterAction::Punch,
    ] {
        engine.act(FighterSlot::One, action);
    }
    for _ in 0..4 {
        engine.step();
    }

    let fighter = duel.fighter(FighterSlot::One);
    assert_eq!(fighter.children().len(), 1);
    let child = fighter.children().live().next().expect("projectile spawned");
    assert_eq!(child.id(), PROJECTILE);
    assert_eq!(child.position(), Position::new(115, 160));

    let mut renderer = RecordingRenderer::default();
    duel.render(&mut renderer);
    assert_eq!(
        renderer.drawn,
        vec![PROJECTILE, AnimationId::IDLE, AnimationId::IDLE]
    );

    let mut engine = CombatEngine::new(&mut duel);
    for _ in 0..3 {
        engine.step();
    }
    assert!(duel.fighter(FighterSlot::One).children().is_empty());
}

#[test]
fn knockback_lands_and_stands_up() {
    let attacker = corner(
        FighterSlot::One,
        100,
        Facing::Right,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let animations = MockAnimationEngine::new()
        .with_frame_count(AnimationId::DAMAGE, 40)
        .with_frame_count(AnimationId::STANDUP, 2)
        .with_event(
            AnimationId::DAMAGE,
            0,
            CombatEvent::Recoil {
                impulse_x: 2.0,
                impulse_y: -4.0,
            },
        );
    let defender = corner(
        FighterSlot::Two,
        115,
        Facing::Left,
        CombatConfig::default(),
        animations.clone(),
    );
    let body = defender.body.clone();
    let mut duel = Duel::new(attacker.fighter, defender.fighter);
    let mut engine = CombatEngine::new(&mut duel);

    assert_eq!(engine.act(FighterSlot::One, FighterAction::Punch), Some(JAB));
    let report = engine.step();
    assert_eq!(report.outcome(FighterSlot::One), HitOutcome::Pixel);
    assert!(report.any_hit());
    assert_eq!(
        animations.displayed(),
        vec![(AnimationId::DAMAGE, "JAB".to_owned())]
    );

    for _ in 0..3 {
        engine.step();
    }
    assert!(body.state().in_air);

    let mut landed = false;
    for _ in 0..200 {
        engine.step();
        if !body.state().in_air {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(duel.fighter(FighterSlot::Two).state(), CombatState::Recoil);
    assert_eq!(
        duel.fighter(FighterSlot::Two).animation_id(),
        AnimationId::STANDUP
    );

    let mut engine = CombatEngine::new(&mut duel);
    for _ in 0..8 {
        engine.step();
    }
    let defender = duel.fighter(FighterSlot::Two);
    assert_eq!(defender.state(), CombatState::Standing);
    assert_eq!(defender.animation_id(), AnimationId::IDLE);
    assert_eq!(defender.health(), 480);
    assert!(body.state().position.x > 115);
    assert_eq!(body.state().position.y, 190);
}

#[test]
fn defeat_decides_the_round_and_unlocks_finishers() {
    let one = corner(
        FighterSlot::One,
        100,
        Facing::Right,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let two = corner(
        FighterSlot::Two,
        115,
        Facing::Left,
        CombatConfig::default().with_vitals(10, 10),
        MockAnimationEngine::new(),
    );
    let mut duel = Duel::new(one.fighter, two.fighter);
    let mut engine = CombatEngine::new(&mut duel);

    engine.act(FighterSlot::One, FighterAction::Punch);
    let reports = engine.run(10);
    assert_eq!(reports.len(), 1);
    assert_eq!(duel.winner(), Some(FighterSlot::One));

    let loser = duel.fighter(FighterSlot::Two);
    assert!(loser.is_defeated());
    assert_eq!(loser.animation_id(), AnimationId::DEFEAT);
    assert_eq!(
        duel.fighter(FighterSlot::One).state(),
        CombatState::Victory
    );

    let mut engine = CombatEngine::new(&mut duel);
    assert_eq!(engine.act(FighterSlot::Two, FighterAction::Kick), None);
    engine.act(FighterSlot::One, FighterAction::Up);
    assert_eq!(engine.act(FighterSlot::One, FighterAction::Punch), Some(SCRAP));
    assert_eq!(duel.fighter(FighterSlot::One).state(), CombatState::Scrap);
    assert_eq!(duel.winner(), Some(FighterSlot::One));
}

#[test]
fn walking_up_to_the_opponent_enables_close_range_moves() {
    let mut duel = default_duel(10, 40);
    let mut engine = CombatEngine::new(&mut duel);

    engine.act(FighterSlot::Two, FighterAction::WalkLeft);
    engine.step();
    assert_eq!(duel.fighter(FighterSlot::Two).position().x, 45);
    assert!(duel.fighter(FighterSlot::Two).is_close());

    let mut engine = CombatEngine::new(&mut duel);
    assert_eq!(engine.act(FighterSlot::Two, FighterAction::Kick), Some(THROW));
    let report = engine.step();
    assert_eq!(report.outcome(FighterSlot::Two), HitOutcome::Pixel);
    assert_eq!(duel.fighter(FighterSlot::One).health(), 470);
    assert_eq!(
        duel.fighter(FighterSlot::One).state(),
        CombatState::Recoil
    );
}

#[test]
fn kick_far_away_falls_back_to_nothing_on_the_ground() {
    let mut duel = default_duel(10, 200);
    let mut engine = CombatEngine::new(&mut duel);
    assert_eq!(engine.act(FighterSlot::One, FighterAction::Kick), None);
}

#[test]
fn jump_only_moves_fire_in_the_air_and_fighters_land() {
    let one = corner(
        FighterSlot::One,
        100,
        Facing::Right,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let body = one.body.clone();
    let two = corner(
        FighterSlot::Two,
        300,
        Facing::Left,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let mut duel = Duel::new(one.fighter, two.fighter);
    let mut engine = CombatEngine::new(&mut duel);

    engine.act(FighterSlot::One, FighterAction::Jump);
    assert!(body.state().in_air);
    assert_eq!(
        duel.fighter(FighterSlot::One).state(),
        CombatState::Jumping
    );

    let mut engine = CombatEngine::new(&mut duel);
    assert_eq!(engine.act(FighterSlot::One, FighterAction::Kick), Some(AIR_KICK));

    for _ in 0..400 {
        engine.step();
    }
    let fighter = duel.fighter(FighterSlot::One);
    assert!(!body.state().in_air);
    assert_eq!(fighter.state(), CombatState::Standing);
    assert_eq!(fighter.animation_id(), AnimationId::IDLE);
}

#[test]
fn decoding_frames_cannot_be_hit() {
    let one = corner(
        FighterSlot::One,
        100,
        Facing::Right,
        CombatConfig::default(),
        MockAnimationEngine::new(),
    );
    let two = corner(
        FighterSlot::Two,
        115,
        Facing::Left,
        CombatConfig::default(),
        MockAnimationEngine::new().with_pending(AnimationId::IDLE),
    );
    let mut duel = Duel::new(one.fighter, two.fighter);
    let mut engine = CombatEngine::new(&mut duel);

    engine.act(FighterSlot::One, FighterAction::Punch);
    let report = engine.step();
    assert_eq!(report.outcome(FighterSlot::One), HitOutcome::None);
    assert_eq!(
        duel.fighter(FighterSlot::Two).health(),
        CombatConfig::DEFAULT_HEALTH_MAX
    );
}
