//! Plain monster behaviour.
//!
//! Monsters have a single strike. Whether it comes depends on what the player
//! just did and a percent roll scaled by the player's level and skills.

use game_core::combat::check;
use game_core::{Battle, OpponentMove, PercentFormula, PlayerAction, RngSource};

use crate::api::OpponentPolicy;

#[derive(Clone, Copy, Debug, Default)]
pub struct MonsterAi;

impl MonsterAi {
    pub fn new() -> Self {
        Self
    }

    /// Retaliation formula for the player's last action. `None` means the
    /// monster does not get to act.
    fn retaliation<'a>(battle: &'a Battle) -> Option<&'a PercentFormula> {
        let monster = &battle.config().monster;
        let Some(exchange) = battle.last_exchange() else {
            return Some(&monster.retaliation_after_attack);
        };
        match exchange.action {
            PlayerAction::Counter if exchange.countered => None,
            PlayerAction::Counter => Some(&monster.retaliation_after_failed_counter),
            PlayerAction::UseItem => Some(&monster.retaliation_after_item),
            PlayerAction::Attack
            | PlayerAction::Defend
            | PlayerAction::Parry
            | PlayerAction::Run => Some(&monster.retaliation_after_attack),
        }
    }
}

impl OpponentPolicy for MonsterAi {
    fn choose(&self, battle: &Battle, rng: &mut dyn RngSource) -> OpponentMove {
        let player = battle.player();
        let strikes = Self::retaliation(battle)
            .is_some_and(|formula| check(formula, player.level, &player.skills, rng));
        tracing::debug!(strikes, exchange = ?battle.last_exchange(), "monster decision");
        if strikes {
            OpponentMove::Strike
        } else {
            OpponentMove::Hesitate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{
        BattlePhase, CharacterSheet, Combatant, DamageBand, GameConfig, OpponentKind,
        ScriptedRng,
    };

    fn battle() -> Battle {
        let player = Combatant::player(&CharacterSheet::new_game());
        let slime = Combatant::opponent("Slime", 30, DamageBand::from_peak(5, 0.7));
        Battle::new(GameConfig::default(), player, slime, OpponentKind::Monster)
    }

    #[test]
    fn retaliates_after_an_attack_on_a_low_roll() {
        let mut battle = battle();
        // Player misses (roll 99), then the monster rolls 10 against 77%.
        let mut rng = ScriptedRng::new().with_ints([99, 10]);
        battle
            .resolve_player_action(PlayerAction::Attack, &mut rng)
            .unwrap();
        assert_eq!(battle.phase(), BattlePhase::AwaitingOpponentAction);
        assert_eq!(MonsterAi.choose(&battle, &mut rng), OpponentMove::Strike);
    }

    #[test]
    fn hesitates_on_a_high_roll() {
        let mut battle = battle();
        let mut rng = ScriptedRng::new().with_ints([99, 90]);
        battle
            .resolve_player_action(PlayerAction::Defend, &mut rng)
            .unwrap();
        assert_eq!(MonsterAi.choose(&battle, &mut rng), OpponentMove::Hesitate);
    }

    #[test]
    fn successful_counter_negates_the_strike() {
        let mut battle = battle();
        // Counter roll 0 succeeds; damage roll; the monster then never rolls.
        let mut rng = ScriptedRng::new().with_ints([0, 10]);
        battle
            .resolve_player_action(PlayerAction::Counter, &mut rng)
            .unwrap();
        assert_eq!(MonsterAi.choose(&battle, &mut rng), OpponentMove::Hesitate);
        assert_eq!(rng.remaining_ints(), 0);
    }
}
