//! Turn-synchronous battle state machine.

use crate::action::{ActionError, PlayerAction};
use crate::combat::{
    MitigationNote, MitigationPolicy, chance_of, check, defence_reduction, mitigate,
    resolve, resolve_player_attack, roll_hit, roll_player_damage, split_hits,
};
use crate::config::GameConfig;
use crate::env::RngSource;
use crate::moves::{BossMove, MoveKind, MoveSet};
use crate::state::{Combatant, DamageBand};

use super::errors::BattleError;
use super::event::{BattleEvent, BattleOutcome, BattlePhase};

/// What the player is fighting.
#[derive(Clone, Debug, PartialEq)]
pub enum OpponentKind {
    /// Plain monster with a single strike.
    Monster,
    /// Boss with a move registry.
    Boss(MoveSet),
}

/// The opponent's choice for one turn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpponentMove {
    /// A boss move from the registry (or its fallback).
    Boss(BossMove),
    /// Monster strike with its own band.
    Strike,
    /// Monster holds back or whiffs.
    Hesitate,
}

/// Summary of the player's half of the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerExchange {
    pub action: PlayerAction,
    /// An attack hit.
    pub landed: bool,
    /// A counter against a monster succeeded.
    pub countered: bool,
}

/// One encounter between the player and a single opponent.
///
/// Drive it by matching on [`Battle::phase`]: feed a player action while
/// awaiting input, an opponent move while awaiting the opponent, then call
/// [`Battle::end_round`] and [`Battle::check_termination`].
#[derive(Clone, Debug)]
pub struct Battle {
    config: GameConfig,
    player: Combatant,
    opponent: Combatant,
    kind: OpponentKind,
    phase: BattlePhase,
    turn: u32,
    outcome: Option<BattleOutcome>,
    revival_available: bool,
    revived: bool,
    exchange: Option<PlayerExchange>,
}

impl Battle {
    pub fn new(
        config: GameConfig,
        player: Combatant,
        opponent: Combatant,
        kind: OpponentKind,
    ) -> Self {
        Self {
            config,
            player,
            opponent,
            kind,
            phase: BattlePhase::AwaitingPlayerInput,
            turn: 1,
            outcome: None,
            revival_available: false,
            revived: false,
            exchange: None,
        }
    }

    /// Allows one revival at half HP when the player drops to 0.
    #[must_use]
    pub fn with_revival(mut self, available: bool) -> Self {
        self.revival_available = available;
        self
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    /// Mutable access for out-of-band changes such as item use mid-battle.
    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.player
    }

    pub fn opponent(&self) -> &Combatant {
        &self.opponent
    }

    pub fn kind(&self) -> &OpponentKind {
        &self.kind
    }

    pub fn moves(&self) -> Option<&MoveSet> {
        match &self.kind {
            OpponentKind::Boss(moves) => Some(moves),
            OpponentKind::Monster => None,
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, OpponentKind::Boss(_))
    }

    /// The player's half of the current round, once resolved.
    pub fn last_exchange(&self) -> Option<PlayerExchange> {
        self.exchange
    }

    /// Whether the one-time revival has fired.
    pub fn revived(&self) -> bool {
        self.revived
    }

    fn expect_phase(&self, expected: BattlePhase) -> Result<(), BattleError> {
        if self.phase != expected {
            return Err(BattleError::out_of_phase(expected, self.phase, self.turn));
        }
        Ok(())
    }

    fn finish(&mut self, outcome: BattleOutcome, events: &mut Vec<BattleEvent>) {
        tracing::info!(%outcome, turn = self.turn, "battle finished");
        self.outcome = Some(outcome);
        self.phase = BattlePhase::Finished;
        events.push(BattleEvent::Finished { outcome });
    }

    fn check_enrage(&mut self, events: &mut Vec<BattleEvent>) {
        if !self.is_boss() || !self.opponent.is_alive() {
            return;
        }
        if self.opponent.refresh_enrage(self.config.boss.enrage_threshold) {
            tracing::info!(hp = self.opponent.hp(), "opponent enraged");
            events.push(BattleEvent::Enraged);
        }
    }

    fn set_charge_cooldown(&mut self, turns: u32) {
        let charge = self.moves().and_then(|moves| moves.charge_move()).map(|m| m.id);
        if let Some(id) = charge {
            self.opponent.cooldowns.set(id, turns);
        }
    }

    // ========================================================================
    // Player half
    // ========================================================================

    /// Resolves the player's declared action.
    ///
    /// `run` against a boss is rejected before anything changes. If the
    /// opponent drops to 0 HP the battle ends here and the opponent never acts.
    pub fn resolve_player_action(
        &mut self,
        action: PlayerAction,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<Vec<BattleEvent>, BattleError> {
        self.expect_phase(BattlePhase::AwaitingPlayerInput)?;
        if action == PlayerAction::Run && self.is_boss() {
            return Err(ActionError::RunForbidden.into());
        }

        tracing::debug!(turn = self.turn, %action, "resolving player action");
        self.phase = BattlePhase::ResolvingPlayerAction;
        self.opponent.last_action = Some(action);

        let mut events = Vec::new();
        let mut exchange = PlayerExchange {
            action,
            landed: false,
            countered: false,
        };

        match action {
            PlayerAction::Attack => {
                exchange.landed = self.player_attack(&mut events, rng);
            }
            PlayerAction::Counter if !self.is_boss() => {
                exchange.countered = self.monster_counter(&mut events, rng);
            }
            PlayerAction::Run => {
                self.attempt_flee(&mut events, rng);
            }
            PlayerAction::UseItem => events.push(BattleEvent::ItemUsed),
            PlayerAction::Defend | PlayerAction::Parry | PlayerAction::Counter => {
                events.push(BattleEvent::StanceTaken { action });
            }
        }
        self.exchange = Some(exchange);

        if self.phase == BattlePhase::ResolvingPlayerAction {
            self.phase = BattlePhase::CheckOpponentAlive;
            if self.opponent.is_alive() {
                self.phase = BattlePhase::AwaitingOpponentAction;
            } else {
                self.finish(BattleOutcome::Victory, &mut events);
            }
        }
        Ok(events)
    }

    fn player_attack(
        &mut self,
        events: &mut Vec<BattleEvent>,
        rng: &mut (impl RngSource + ?Sized),
    ) -> bool {
        let result = resolve_player_attack(&self.config, &self.player, &self.opponent, rng);
        let Some(damage) = result.damage else {
            events.push(BattleEvent::PlayerMissed);
            return false;
        };

        let applied = self.opponent.apply_damage(damage);
        events.push(BattleEvent::PlayerHit {
            damage: applied,
            critical: matches!(result.outcome, crate::combat::AttackOutcome::Critical),
        });
        self.check_enrage(events);

        if self.opponent.is_alive()
            && self.opponent.is_charging()
            && roll_hit(self.config.boss.charge_interrupt_chance, rng)
        {
            self.opponent.interrupt_charge();
            self.set_charge_cooldown(self.config.boss.charge_rearm_after_interrupt);
            events.push(BattleEvent::ChargeInterrupted);
        }
        true
    }

    fn monster_counter(
        &mut self,
        events: &mut Vec<BattleEvent>,
        rng: &mut (impl RngSource + ?Sized),
    ) -> bool {
        let monster = &self.config.monster;
        let chance = chance_of(&monster.counter_chance, self.player.level, &self.player.skills);
        // Strict `roll < chance`, like every other percent check.
        if !roll_hit(chance, rng) {
            events.push(BattleEvent::CounterFailed);
            return false;
        }

        let weapon_max = self.player.band.max();
        let monster_max = self.opponent.band.max();
        let lo = weapon_max.min(monster_max);
        let hi = (weapon_max.max(monster_max) as f64 * monster.counter_damage_multiplier).round();
        let damage = rng.uniform_int(lo, hi as u32);
        let applied = self.opponent.apply_damage(damage);
        events.push(BattleEvent::MonsterCountered { damage: applied });
        true
    }

    fn attempt_flee(&mut self, events: &mut Vec<BattleEvent>, rng: &mut (impl RngSource + ?Sized)) {
        let fled = check(
            &self.config.monster.flee_chance,
            self.player.level,
            &self.player.skills,
            rng,
        );
        if fled {
            events.push(BattleEvent::Fled);
            self.finish(BattleOutcome::Fled, events);
            return;
        }

        events.push(BattleEvent::FleeFailed);
        let band = self.opponent.band;
        let reduction =
            defence_reduction(&self.player.skills, self.config.offense.defence_reduction);
        let damage = resolve(band.min(), band.max(), 1.0, reduction, rng);
        let applied = self.player.apply_damage(damage);
        events.push(BattleEvent::OpponentStrike {
            move_name: None,
            damage: applied,
            hit: 1,
            hits: 1,
        });
        // The opponent already acted this round.
        self.phase = BattlePhase::TickCooldowns;
    }

    // ========================================================================
    // Opponent half
    // ========================================================================

    /// Applies the opponent's chosen move.
    ///
    /// A charging boss always executes its release move, whatever was passed.
    pub fn resolve_opponent_move(
        &mut self,
        chosen: OpponentMove,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Result<Vec<BattleEvent>, BattleError> {
        self.expect_phase(BattlePhase::AwaitingOpponentAction)?;
        self.phase = BattlePhase::ResolvingOpponentAction;
        let mut events = Vec::new();

        match chosen {
            OpponentMove::Hesitate => {
                // A landed monster counter already negated the attack.
                if !self.exchange.is_some_and(|e| e.countered) {
                    events.push(BattleEvent::OpponentMissed);
                }
            }
            OpponentMove::Strike => {
                let stance = self
                    .exchange
                    .map(|e| e.action)
                    .filter(|a| matches!(a, PlayerAction::Defend | PlayerAction::Parry));
                let band = self.opponent.band;
                self.land_strike(None, MoveKind::Strike, band, stance, &mut events, rng);
            }
            OpponentMove::Boss(requested) => {
                let Some(moves) = self.moves() else {
                    self.phase = BattlePhase::AwaitingOpponentAction;
                    return Err(BattleError::not_a_boss(self.turn));
                };
                let boss_move = Self::enforce_charge_rules(moves, &self.opponent, requested);
                self.execute_boss_move(boss_move, &mut events, rng);
            }
        }

        self.phase = BattlePhase::TickCooldowns;
        Ok(events)
    }

    fn enforce_charge_rules(moves: &MoveSet, boss: &Combatant, requested: BossMove) -> BossMove {
        let release = *moves.release_move();
        if boss.is_charging() && requested.kind != MoveKind::Release {
            tracing::warn!(requested = %requested.id, "charging boss forced to release");
            return release;
        }
        if !boss.is_charging() && requested.kind == MoveKind::Release {
            tracing::warn!(requested = %requested.id, "release requested without a charge");
            return *moves.fallback();
        }
        requested
    }

    fn execute_boss_move(
        &mut self,
        boss_move: BossMove,
        events: &mut Vec<BattleEvent>,
        rng: &mut (impl RngSource + ?Sized),
    ) {
        tracing::debug!(turn = self.turn, id = %boss_move.id, "executing boss move");
        events.push(BattleEvent::MoveAnnounced {
            name: boss_move.name,
            note: boss_move.note,
        });

        match boss_move.kind {
            MoveKind::Charge => {
                self.opponent.begin_charge();
                events.push(BattleEvent::ChargeBegun);
            }
            MoveKind::Heal => {
                let amount = boss_move
                    .band
                    .map(|band| rng.uniform_int(band.min(), band.max()))
                    .unwrap_or(0);
                let applied = self.opponent.apply_heal(amount);
                events.push(BattleEvent::OpponentHealed { amount: applied });
            }
            kind => {
                if kind == MoveKind::Release {
                    self.opponent.release_charge();
                    self.set_charge_cooldown(self.config.boss.charge_rearm_after_release);
                }
                let stance = self.exchange.map(|e| e.action);
                let band = boss_move.band.unwrap_or(self.opponent.band);
                self.land_strike(Some(boss_move.name), kind, band, stance, events, rng);
            }
        }

        if boss_move.cooldown > 0 {
            self.opponent.cooldowns.set(boss_move.id, boss_move.cooldown);
        }
    }

    /// Lands a damaging move on the player.
    ///
    /// Draw order: mitigation rolls, the counter-hit damage (if any), then the
    /// move band. A counter that kills the opponent cancels the incoming blow.
    fn land_strike(
        &mut self,
        move_name: Option<&'static str>,
        kind: MoveKind,
        band: DamageBand,
        stance: Option<PlayerAction>,
        events: &mut Vec<BattleEvent>,
        rng: &mut (impl RngSource + ?Sized),
    ) {
        let mitigation = MitigationPolicy::new(&self.config).evaluate(
            stance,
            kind,
            self.player.level,
            &self.player.skills,
            self.opponent.is_enraged(),
            rng,
        );
        if mitigation.note != MitigationNote::Unopposed {
            events.push(BattleEvent::Mitigated {
                note: mitigation.note,
            });
        }

        if mitigation.counter_hit {
            let damage = roll_player_damage(&self.config, &self.player, &self.opponent, false, rng);
            let applied = self.opponent.apply_damage(damage);
            events.push(BattleEvent::CounterStrike { damage: applied });
            self.check_enrage(events);
            if !self.opponent.is_alive() {
                return;
            }
        }

        let hits = kind.hit_count();
        let raw = rng.uniform_int(band.min(), band.max());
        let reduction =
            defence_reduction(&self.player.skills, self.config.offense.defence_reduction);
        let shares = split_hits(raw, hits).into_iter().zip(split_hits(reduction, hits));

        for (index, (raw_share, reduction_share)) in shares.enumerate() {
            let damage = mitigate(raw_share, mitigation.multiplier, reduction_share);
            let applied = self.player.apply_damage(damage);
            events.push(BattleEvent::OpponentStrike {
                move_name,
                damage: applied,
                hit: index as u8 + 1,
                hits,
            });
            if !self.player.is_alive() {
                break;
            }
        }
    }

    // ========================================================================
    // Round bookkeeping
    // ========================================================================

    /// Ticks both combatants' cooldowns exactly once and advances the turn.
    pub fn end_round(&mut self) -> Result<(), BattleError> {
        self.expect_phase(BattlePhase::TickCooldowns)?;
        self.player.tick_cooldowns();
        self.opponent.tick_cooldowns();
        self.turn += 1;
        self.phase = BattlePhase::CheckTermination;
        Ok(())
    }

    /// Decides whether the battle continues.
    ///
    /// A player at 0 HP is revived once at half max HP when revival is
    /// available; otherwise the battle is lost.
    pub fn check_termination(&mut self) -> Result<Vec<BattleEvent>, BattleError> {
        self.expect_phase(BattlePhase::CheckTermination)?;
        let mut events = Vec::new();

        if !self.player.is_alive() {
            if self.revival_available && !self.revived {
                self.revived = true;
                let hp = (self.player.max_hp() / 2).max(1);
                self.player.set_hp(hp);
                tracing::info!(hp, "player revived");
                events.push(BattleEvent::Revived { hp });
            } else {
                self.finish(BattleOutcome::Defeat, &mut events);
                return Ok(events);
            }
        }

        if self.opponent.is_alive() {
            self.phase = BattlePhase::AwaitingPlayerInput;
        } else {
            self.finish(BattleOutcome::Victory, &mut events);
        }
        Ok(events)
    }
}
