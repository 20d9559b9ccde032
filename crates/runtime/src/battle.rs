//! Battle runner.
//!
//! Drives a [`Battle`] state machine to completion: reads player actions from
//! a [`CommandProvider`], asks an [`OpponentPolicy`] for the opponent's move,
//! narrates every event and folds the result back into the character sheet.

use game_content::{BossDefinition, ItemCatalog, MonsterTemplate};
use game_core::{
    Battle, BattleEvent, BattleOutcome, BattlePhase, CharacterSheet, Combatant, GameConfig,
    GameError, OpponentKind, PlayerAction, RngSource,
};

use crate::api::{CommandProvider, OpponentPolicy, PromptKind, Result, RuntimeError};
use crate::events::{NarrativeSink, Tone, describe};
use crate::progression::{ItemError, parse_choice, use_item};
use crate::providers::{MonsterAi, ScoredBossAi};

/// Everything needed to start one fight.
#[derive(Clone, Debug)]
pub struct BattleSetup {
    pub opponent: Combatant,
    pub kind: OpponentKind,
    pub gold: u32,
    pub xp: u32,
    /// Recorded in the sheet's defeated bosses on victory.
    pub boss: Option<&'static str>,
    pub intro: Option<&'static str>,
}

impl BattleSetup {
    pub fn monster(template: &MonsterTemplate, config: &GameConfig) -> Self {
        let band = template.strike_band(config.monster.strike_floor);
        Self {
            opponent: Combatant::opponent(template.name.clone(), template.hp, band),
            kind: OpponentKind::Monster,
            gold: template.gold,
            xp: template.xp,
            boss: None,
            intro: None,
        }
    }

    pub fn boss(definition: &BossDefinition) -> Self {
        let band = definition
            .moves
            .fallback()
            .band
            .unwrap_or(game_core::DamageBand::clamped(1, 2));
        Self {
            opponent: Combatant::opponent(definition.name, definition.hp, band),
            kind: OpponentKind::Boss(definition.moves.clone()),
            gold: definition.gold,
            xp: definition.xp,
            boss: Some(definition.name),
            intro: Some(definition.intro),
        }
    }

    pub fn name(&self) -> &str {
        &self.opponent.name
    }
}

/// Result of a finished fight, after the sheet has been updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Player HP when the battle ended, before any defeat penalty.
    pub final_hp: u32,
    /// Gold and XP granted; zero unless the player won.
    pub gold: u32,
    pub xp: u32,
    pub turns: u32,
    pub revived: bool,
}

/// Runs battles with a fixed config, item catalog and opponent policies.
pub struct BattleRunner {
    config: GameConfig,
    items: ItemCatalog,
    boss_policy: Box<dyn OpponentPolicy>,
    monster_policy: Box<dyn OpponentPolicy>,
}

impl BattleRunner {
    pub fn new(config: GameConfig, items: ItemCatalog) -> Self {
        Self {
            config,
            items,
            boss_policy: Box::new(ScoredBossAi::new()),
            monster_policy: Box::new(MonsterAi::new()),
        }
    }

    #[must_use]
    pub fn with_boss_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.boss_policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn with_monster_policy(mut self, policy: impl OpponentPolicy + 'static) -> Self {
        self.monster_policy = Box::new(policy);
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Fights `setup` to the end and writes HP, rewards and penalties back to
    /// `sheet`.
    pub async fn run(
        &self,
        setup: BattleSetup,
        sheet: &mut CharacterSheet,
        input: &dyn CommandProvider,
        sink: &dyn NarrativeSink,
        rng: &mut dyn RngSource,
    ) -> Result<BattleReport> {
        let revival_item = self.config.progression.revival_item.as_str();
        let name = setup.name().to_string();
        tracing::info!(opponent = %name, boss = setup.boss.is_some(), "battle started");

        if let Some(intro) = setup.intro {
            sink.emit(Tone::Banner, intro);
        } else {
            sink.emit(Tone::Banner, &format!("A wild {name} appears!"));
        }

        let mut battle = Battle::new(
            self.config.clone(),
            Combatant::player(sheet),
            setup.opponent.clone(),
            setup.kind.clone(),
        )
        .with_revival(sheet.can_revive(revival_item));

        loop {
            match battle.phase() {
                BattlePhase::AwaitingPlayerInput => {
                    sink.emit(
                        Tone::Status,
                        &format!(
                            "Your HP: {} | {} HP: {}",
                            battle.player().hp(),
                            name,
                            battle.opponent().hp()
                        ),
                    );
                    let prompt = PromptKind::BattleAction {
                        boss: battle.is_boss(),
                    };
                    let line = input.require_line(prompt).await?;
                    let action = match PlayerAction::parse(&line) {
                        Ok(action) => action,
                        Err(err) => {
                            sink.emit(Tone::Danger, &err.to_string());
                            continue;
                        }
                    };

                    if action == PlayerAction::UseItem
                        && !self.use_item_in_battle(&mut battle, sheet, input, sink).await?
                    {
                        continue;
                    }

                    match battle.resolve_player_action(action, rng) {
                        Ok(events) => narrate(sink, &events, &name),
                        Err(err) if err.severity().is_recoverable() => {
                            tracing::debug!(code = err.error_code(), "action rejected, re-prompting");
                            sink.emit(Tone::Danger, &err.to_string());
                        }
                        Err(err) => {
                            tracing::error!(
                                code = err.error_code(),
                                turn = err.context().map(|ctx| ctx.turn),
                                "battle step failed"
                            );
                            return Err(err.into());
                        }
                    }
                }
                BattlePhase::AwaitingOpponentAction => {
                    let policy = if battle.is_boss() {
                        &self.boss_policy
                    } else {
                        &self.monster_policy
                    };
                    let chosen = policy.choose(&battle, rng);
                    let events = battle.resolve_opponent_move(chosen, rng)?;
                    narrate(sink, &events, &name);
                }
                BattlePhase::TickCooldowns => battle.end_round()?,
                BattlePhase::CheckTermination => {
                    let events = battle.check_termination()?;
                    if events
                        .iter()
                        .any(|event| matches!(event, BattleEvent::Revived { .. }))
                    {
                        sheet.take_revival(revival_item);
                    }
                    narrate(sink, &events, &name);
                }
                BattlePhase::Finished => break,
                phase => return Err(RuntimeError::UnexpectedPhase(phase)),
            }
        }

        let outcome = battle
            .outcome()
            .ok_or(RuntimeError::UnexpectedPhase(BattlePhase::Finished))?;
        let final_hp = battle.player().hp();
        sheet.hp = final_hp;

        let (gold, xp) = match outcome {
            BattleOutcome::Victory => {
                sheet.record_rewards(setup.gold, setup.xp);
                if let Some(boss) = setup.boss.filter(|boss| !sheet.has_defeated(boss)) {
                    sheet.defeated_bosses.push(boss.to_string());
                }
                sink.emit(
                    Tone::Success,
                    &format!("You gain {} gold and {} xp.", setup.gold, setup.xp),
                );
                (setup.gold, setup.xp)
            }
            BattleOutcome::Defeat => {
                sheet.apply_defeat_penalty();
                sink.emit(Tone::Danger, "GAME OVER! You lose half your levels and most of your gold.");
                (0, 0)
            }
            BattleOutcome::Fled => (0, 0),
        };

        let report = BattleReport {
            outcome,
            final_hp,
            gold,
            xp,
            turns: battle.turn(),
            revived: battle.revived(),
        };
        tracing::info!(?report, "battle report");
        Ok(report)
    }

    /// Prompts for an item and applies it to the sheet and the battle.
    ///
    /// Returns false when nothing was used; the turn is not consumed then.
    async fn use_item_in_battle(
        &self,
        battle: &mut Battle,
        sheet: &mut CharacterSheet,
        input: &dyn CommandProvider,
        sink: &dyn NarrativeSink,
    ) -> Result<bool> {
        let counts = sheet.item_counts();
        if counts.is_empty() {
            sink.emit(Tone::Danger, &ItemError::EmptyInventory.to_string());
            return Ok(false);
        }
        sink.emit(Tone::Info, "Which item would you like to use?");
        for (idx, (item, count)) in counts.iter().enumerate() {
            sink.emit(Tone::Info, &format!(" {}. {item} x{count}", idx + 1));
        }

        let line = input.require_line(PromptKind::ItemIndex).await?;
        let Some(index) = parse_choice(&line) else {
            sink.emit(Tone::Danger, &ItemError::NotANumber(line).to_string());
            return Ok(false);
        };

        sheet.hp = battle.player().hp();
        match use_item(sheet, &self.items, index) {
            Ok(outcome) => {
                battle.player_mut().sync_from_sheet(sheet);
                sink.emit(Tone::Success, &outcome.to_string());
                Ok(true)
            }
            Err(err) => {
                tracing::debug!(%err, "item use rejected");
                sink.emit(Tone::Danger, &err.to_string());
                Ok(false)
            }
        }
    }
}

fn narrate(sink: &dyn NarrativeSink, events: &[BattleEvent], opponent: &str) {
    for event in events {
        let (tone, text) = describe(event, opponent);
        sink.emit(tone, &text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScriptedCommandProvider;
    use crate::events::MemorySink;
    use game_content::{Bestiary, PHOENIX_FEATHER};
    use game_core::{OpponentMove, ScriptedRng};

    struct AlwaysStrike;

    impl OpponentPolicy for AlwaysStrike {
        fn choose(&self, _battle: &Battle, _rng: &mut dyn RngSource) -> OpponentMove {
            OpponentMove::Strike
        }
    }

    fn goblin() -> MonsterTemplate {
        Bestiary::default().select(1, 30).cloned().unwrap()
    }

    #[tokio::test]
    async fn bad_input_reprompts_without_a_turn() {
        let runner = BattleRunner::new(GameConfig::default(), ItemCatalog::default());
        let mut sheet = CharacterSheet::new_game();
        let input = ScriptedCommandProvider::new(["dance", "use item", "run"]);
        let sink = MemorySink::new();
        // Flee roll 0 succeeds.
        let mut rng = ScriptedRng::new().with_ints([0]);

        let setup = BattleSetup::monster(&goblin(), runner.config());
        let report = runner
            .run(setup, &mut sheet, &input, &sink, &mut rng)
            .await
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::Fled);
        assert_eq!(report.turns, 1);
        assert!(sink.contains("dance"));
        assert!(sink.contains("anything to use"));
        assert_eq!(sheet.hp, 100);
    }

    #[tokio::test]
    async fn recoverable_battle_error_reprompts() {
        let runner = BattleRunner::new(GameConfig::default(), ItemCatalog::default());
        let mut sheet = CharacterSheet::new_game();
        let input = ScriptedCommandProvider::new(["run"]);
        let sink = MemorySink::new();
        let mut rng = ScriptedRng::new();

        let setup = BattleSetup::boss(&game_content::drago());
        let result = runner
            .run(setup, &mut sheet, &input, &sink, &mut rng)
            .await;

        // The rejected run is reported and the runner asks again.
        assert!(matches!(result, Err(RuntimeError::InputClosed)));
        assert!(sink.contains("no escaping"));
        assert_eq!(sheet.hp, 100);
    }

    #[tokio::test]
    async fn feather_revives_once_then_defeat_applies_the_penalty() {
        let runner = BattleRunner::new(GameConfig::default(), ItemCatalog::default())
            .with_monster_policy(AlwaysStrike);
        let mut sheet = CharacterSheet::new_game();
        sheet.hp = 10;
        sheet.level = 4;
        sheet.gold = 500;
        sheet.inventory = vec![PHOENIX_FEATHER.to_string()];

        let input = ScriptedCommandProvider::new(["defend", "defend", "defend"]);
        let sink = MemorySink::new();
        // Every strike rolls its band maximum.
        let mut rng = ScriptedRng::new().with_default_int(1000);

        let template = MonsterTemplate {
            name: "Ogre".into(),
            hp: 500,
            damage: 200,
            gold: 10,
            chance: 100,
            xp: 10,
        };
        let setup = BattleSetup::monster(&template, runner.config());
        let report = runner
            .run(setup, &mut sheet, &input, &sink, &mut rng)
            .await
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::Defeat);
        assert!(report.revived);
        assert_eq!(report.final_hp, 0);
        assert!(sink.contains("REVIVED"));
        assert_eq!(sheet.hp, 1);
        assert_eq!(sheet.level, 2);
        assert_eq!(sheet.gold, 50);
        assert!(sheet.inventory.is_empty());
    }
}
