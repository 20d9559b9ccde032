//! Read-only battle snapshot handed to the boss scorer.

use game_core::{Battle, BossConfig, Cooldowns, MoveSet, PlayerAction};

/// Everything the boss AI looks at when choosing a move.
///
/// Borrowing from the battle keeps scoring pure: the AI can never mutate the
/// combatants it is reasoning about.
#[derive(Clone, Copy, Debug)]
pub struct BossContext<'a> {
    pub turn: u32,
    pub boss_hp: u32,
    pub boss_max_hp: u32,
    pub player_hp: u32,
    pub player_last_action: Option<PlayerAction>,
    pub charging: bool,
    pub enraged: bool,
    pub cooldowns: &'a Cooldowns,
    pub moves: &'a MoveSet,
    pub config: &'a BossConfig,
}

impl<'a> BossContext<'a> {
    /// Snapshot of a boss battle. `None` when the opponent is a plain monster.
    pub fn from_battle(battle: &'a Battle) -> Option<Self> {
        let moves = battle.moves()?;
        let boss = battle.opponent();
        Some(Self {
            turn: battle.turn(),
            boss_hp: boss.hp(),
            boss_max_hp: boss.max_hp(),
            player_hp: battle.player().hp(),
            player_last_action: boss.last_action,
            charging: boss.is_charging(),
            enraged: boss.is_enraged(),
            cooldowns: &boss.cooldowns,
            moves,
            config: &battle.config().boss,
        })
    }

    pub fn boss_hp_ratio(&self) -> f64 {
        if self.boss_max_hp == 0 {
            return 0.0;
        }
        self.boss_hp as f64 / self.boss_max_hp as f64
    }
}
