use game_content::{ItemCatalog, drago};
use game_core::{BattleOutcome, CharacterSheet, GameConfig, ScriptedRng, SkillKind, Weapon};
use runtime::{
    BattleRunner, BattleSetup, Encounter, EncounterSelector, MemorySink,
    ScriptedCommandProvider, apply_level_up, spend_skill_point,
};

fn dragon_slayer() -> CharacterSheet {
    let mut sheet = CharacterSheet::new_game();
    sheet.max_hp = 5000;
    sheet.hp = 5000;
    sheet.weapons = vec![Weapon::new("Dragon Lance", 1000, 1001).unwrap()];
    sheet
}

/// Full boss fight against Drago, driven by scripted input and draws.
///
/// 1. The player hits for 1000; the boss answers with a 750 tail swipe
/// 2. A second hit enrages the boss, which now heals under a third of its HP
/// 3. The third hit kills it before it can act again
#[tokio::test]
async fn drago_fight_round_trip_to_victory() {
    let runner = BattleRunner::new(GameConfig::default(), ItemCatalog::default());
    let mut sheet = dragon_slayer();
    let input = ScriptedCommandProvider::new(["attack", "ATTACK ", "attack"]);
    let sink = MemorySink::new();

    let mut rng = ScriptedRng::new().with_ints([
        // Round 1: hit, no crit, 1000 damage; pool pick 0 (tail swipe), 750 raw
        0, 99, 1000, 0, 750,
        // Round 2: hit, no crit, 1000 damage; heal is the only candidate, heals 100
        0, 99, 1000, 100,
        // Round 3: the killing blow
        0, 99, 1000,
    ]);

    let report = runner
        .run(BattleSetup::boss(&drago()), &mut sheet, &input, &sink, &mut rng)
        .await
        .unwrap();

    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert_eq!(report.final_hp, 4250);
    assert_eq!((report.gold, report.xp), (1200, 1400));
    assert_eq!(report.turns, 3);
    assert!(!report.revived);
    assert_eq!(rng.remaining_ints(), 0);
    assert_eq!(input.remaining(), 0);

    assert!(sink.contains("Tail Swipe for 750"));
    assert!(sink.contains("enraged"));
    assert!(sink.contains("heals for 100"));
    assert!(sink.contains("Victory"));

    assert_eq!(sheet.hp, 4250);
    assert_eq!(sheet.gold, 1200);
    assert_eq!(sheet.xp, 1400);
    assert!(sheet.has_defeated("Drago the Eternal"));

    // The rewards pay for three levels.
    let config = GameConfig::default();
    assert_eq!(apply_level_up(&mut sheet, &config), 3);
    assert_eq!(sheet.level, 4);
    assert_eq!(sheet.xp, 200);
    assert_eq!(sheet.skill_points, 3);
    assert_eq!(spend_skill_point(&mut sheet, SkillKind::Strength), Some(1));
}

#[tokio::test]
async fn run_is_refused_against_a_boss_without_losing_the_turn() {
    let runner = BattleRunner::new(GameConfig::default(), ItemCatalog::default());
    let mut sheet = dragon_slayer();
    let input = ScriptedCommandProvider::new(["run", "attack", "attack", "attack"]);
    let sink = MemorySink::new();
    let mut rng = ScriptedRng::new().with_ints([0, 99, 1000, 0, 750, 0, 99, 1000, 100, 0, 99, 1000]);

    let report = runner
        .run(BattleSetup::boss(&drago()), &mut sheet, &input, &sink, &mut rng)
        .await
        .unwrap();

    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert_eq!(report.turns, 3);
    assert!(sink.contains("no escaping"));
}

#[tokio::test]
async fn exploring_into_a_monster_and_winning() {
    let config = GameConfig::default();
    let runner = BattleRunner::new(config.clone(), ItemCatalog::default());
    let selector = EncounterSelector::default();
    let mut sheet = CharacterSheet::new_game();
    sheet.weapons.push(Weapon::new("Reaper's Scythe", 150, 300).unwrap());
    sheet.equipped = 1;

    // Encounter roll 10 (monster), bestiary roll 30 (Goblin, 100 HP).
    let mut rng = ScriptedRng::new().with_ints([10, 30, 0, 99, 200]);
    let Encounter::Monster(goblin) = selector.roll(&sheet, &mut rng) else {
        panic!("expected a monster encounter");
    };
    assert_eq!(goblin.name, "Goblin");

    let input = ScriptedCommandProvider::new(["attack"]);
    let sink = MemorySink::new();
    let report = runner
        .run(BattleSetup::monster(goblin, &config), &mut sheet, &input, &sink, &mut rng)
        .await
        .unwrap();

    assert_eq!(report.outcome, BattleOutcome::Victory);
    assert!(report.final_hp > 0);
    assert_eq!((report.gold, report.xp), (goblin.gold, goblin.xp));
    assert_eq!(sheet.gold, goblin.gold);
}

#[tokio::test]
async fn input_running_dry_is_an_error() {
    let runner = BattleRunner::new(GameConfig::default(), ItemCatalog::default());
    let mut sheet = dragon_slayer();
    let input = ScriptedCommandProvider::new(Vec::<String>::new());
    let sink = MemorySink::new();
    let mut rng = ScriptedRng::new();

    let result = runner
        .run(BattleSetup::boss(&drago()), &mut sheet, &input, &sink, &mut rng)
        .await;
    assert!(matches!(result, Err(runtime::RuntimeError::InputClosed)));
    assert_eq!(sheet.hp, 5000);
}
