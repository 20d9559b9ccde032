//! Battle phases, outcomes and narrative events.

use crate::action::PlayerAction;
use crate::combat::MitigationNote;

/// Battle state machine phases.
///
/// ```text
/// AwaitingPlayerInput → ResolvingPlayerAction → CheckOpponentAlive
///   → AwaitingOpponentAction → ResolvingOpponentAction → TickCooldowns
///   → CheckTermination → (AwaitingPlayerInput | Finished)
/// ```
///
/// A kill by the player jumps from `CheckOpponentAlive` straight to
/// `Finished`; a failed escape jumps from `ResolvingPlayerAction` to
/// `TickCooldowns` because the opponent already struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    AwaitingPlayerInput,
    ResolvingPlayerAction,
    CheckOpponentAlive,
    AwaitingOpponentAction,
    ResolvingOpponentAction,
    TickCooldowns,
    CheckTermination,
    Finished,
}

/// Tri-state result handed back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

/// Something that happened during a battle step, in order.
///
/// Events carry numbers and identifiers only; turning them into text is the
/// presentation layer's job.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    /// Player's attack landed.
    PlayerHit { damage: u32, critical: bool },
    PlayerMissed,
    /// Player declared a stance resolved during the opponent's move.
    StanceTaken { action: PlayerAction },
    ItemUsed,
    /// A landed attack broke the boss's charge.
    ChargeInterrupted,
    /// The boss crossed its enrage threshold.
    Enraged,
    /// Player's counter against a monster landed; the monster's attack is negated.
    MonsterCountered { damage: u32 },
    CounterFailed,
    Fled,
    FleeFailed,
    /// Boss move chosen, with its flavor line.
    MoveAnnounced {
        name: &'static str,
        note: &'static str,
    },
    ChargeBegun,
    OpponentHealed { amount: u32 },
    /// Opponent's attack did not come.
    OpponentMissed,
    /// How the player's stance played out.
    Mitigated { note: MitigationNote },
    /// Player struck back out of a parry or counter.
    CounterStrike { damage: u32 },
    /// One (sub-)hit landed on the player. `move_name` is `None` for monsters.
    OpponentStrike {
        move_name: Option<&'static str>,
        damage: u32,
        hit: u8,
        hits: u8,
    },
    Revived { hp: u32 },
    Finished { outcome: BattleOutcome },
}
