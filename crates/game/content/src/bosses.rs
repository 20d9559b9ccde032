//! Boss definitions and milestone roster.

use game_core::{BossMove, MoveKind, MoveSet, PlayerAction};

/// A boss and the rewards for beating it.
#[derive(Clone, Debug, PartialEq)]
pub struct BossDefinition {
    pub name: &'static str,
    pub hp: u32,
    pub gold: u32,
    pub xp: u32,
    /// Player level at which the boss blocks further exploration.
    pub milestone_level: u32,
    pub intro: &'static str,
    pub moves: MoveSet,
}

const DESPERATE_NOTE: &str = "The boss lashes out desperately!";

/// Drago the Eternal: charge/release, guard-break and flurry pressure, and a
/// heal under a third of its HP.
pub fn drago() -> BossDefinition {
    BossDefinition {
        name: "Drago the Eternal",
        hp: 2500,
        gold: 1200,
        xp: 1400,
        milestone_level: 25,
        intro: "The ground trembles. Drago the Eternal descends from the ashen sky!",
        moves: MoveSet::new(
            vec![
                BossMove::new("charge", "Charge", MoveKind::Charge)
                    .with_note("Drago inhales, heat distorts the air..."),
                BossMove::new("flame_breath", "Flame Breath", MoveKind::Release)
                    .with_note("Drago unleashes the stored inferno!")
                    .with_band(500, 1000),
                BossMove::new("tail_swipe", "Tail Swipe", MoveKind::GuardBreak)
                    .with_note("A sweeping tail aims to break your guard!")
                    .with_band(750, 1200)
                    .with_cooldown(2)
                    .reacting_to(&[PlayerAction::Defend]),
                BossMove::new("wing_attack", "Wing Attack", MoveKind::MultiHit { hits: 2 })
                    .with_note("Wings blur, multiple strikes to foil a counter!")
                    .with_band(900, 1300)
                    .with_cooldown(2)
                    .reacting_to(&[PlayerAction::Counter]),
                BossMove::new("heal", "Heal", MoveKind::Heal)
                    .with_note("Scales glow as wounds knit back together.")
                    .with_band(100, 500)
                    .with_cooldown(4)
                    .with_heal_threshold(0.33),
            ],
            BossMove::new("basic_attack", "Basic Attack", MoveKind::Strike)
                .with_note(DESPERATE_NOTE)
                .with_band(200, 400),
        ),
    }
}

/// Spidey: reactive strikes with no charge, and a cocoon heal under 30% HP.
pub fn spidey() -> BossDefinition {
    BossDefinition {
        name: "Spidey",
        hp: 1600,
        gold: 700,
        xp: 800,
        milestone_level: 15,
        intro: "Silk threads tighten around you. Spidey drops from the canopy!",
        moves: MoveSet::new(
            vec![
                BossMove::new("web_shot", "Web Shot", MoveKind::Strike)
                    .with_note("Spidey shoots sticky webs to slow you!")
                    .with_band(400, 700)
                    .reacting_to(&[PlayerAction::Attack]),
                BossMove::new("fang_bite", "Fang Bite", MoveKind::GuardBreak)
                    .with_note("Spidey lunges with venomous fangs!")
                    .with_band(600, 1000)
                    .with_cooldown(2)
                    .reacting_to(&[PlayerAction::Defend, PlayerAction::Parry]),
                BossMove::new("leg_stab", "Leg Stab", MoveKind::MultiHit { hits: 2 })
                    .with_note("Spidey jabs with razor legs!")
                    .with_band(500, 900)
                    .with_cooldown(2)
                    .reacting_to(&[PlayerAction::Counter]),
                BossMove::new("cocoon", "Cocoon", MoveKind::Heal)
                    .with_note("Spidey spins a cocoon to shield itself.")
                    .with_band(100, 400)
                    .with_cooldown(4)
                    .with_heal_threshold(0.30),
            ],
            BossMove::new("basic_attack", "Basic Attack", MoveKind::Strike)
                .with_note(DESPERATE_NOTE)
                .with_band(200, 400),
        ),
    }
}

/// Bosses ordered by milestone level.
#[derive(Clone, Debug, PartialEq)]
pub struct BossRoster {
    bosses: Vec<BossDefinition>,
}

impl BossRoster {
    pub fn new(mut bosses: Vec<BossDefinition>) -> Self {
        bosses.sort_by_key(|boss| boss.milestone_level);
        Self { bosses }
    }

    pub fn iter(&self) -> impl Iterator<Item = &BossDefinition> {
        self.bosses.iter()
    }

    pub fn get(&self, name: &str) -> Option<&BossDefinition> {
        self.bosses.iter().find(|boss| boss.name == name)
    }

    /// First boss whose milestone is reached and that `is_defeated` rejects.
    pub fn pending_for(
        &self,
        level: u32,
        is_defeated: impl Fn(&str) -> bool,
    ) -> Option<&BossDefinition> {
        self.bosses
            .iter()
            .find(|boss| level >= boss.milestone_level && !is_defeated(boss.name))
    }
}

impl Default for BossRoster {
    fn default() -> Self {
        Self::new(vec![drago(), spidey()])
    }
}
