//! Abstractions for sourcing player input and opponent decisions.
//!
//! Runtime users plug in [`CommandProvider`] implementations so a session can
//! run against a terminal, scripted fixtures, or a replay. Opponents decide
//! through [`OpponentPolicy`].
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Battle, OpponentMove, RngSource};

use super::errors::{Result, RuntimeError};

/// What the runtime is asking the player for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PromptKind {
    /// Out-of-battle command.
    Command,
    /// Battle action; `run` is offered only against monsters.
    BattleAction { boss: bool },
    /// 1-based item index.
    ItemIndex,
    /// 1-based weapon index.
    WeaponIndex,
    /// 1-based shop entry.
    ShopIndex,
    /// How many copies to buy.
    Quantity,
    /// Skill to raise with a level-up point.
    SkillChoice,
    /// Save slot name.
    SlotName,
}

/// Trait for providing player input lines.
///
/// Different implementations can handle:
/// - Terminal input
/// - Scripted/replayed input
/// - Testing fixtures
///
/// `Ok(None)` means the input source is exhausted.
#[async_trait]
pub trait CommandProvider: Send + Sync {
    async fn read_line(&self, prompt: PromptKind) -> Result<Option<String>>;

    /// Reads a line, treating an exhausted source as an error.
    async fn require_line(&self, prompt: PromptKind) -> Result<String> {
        self.read_line(prompt).await?.ok_or(RuntimeError::InputClosed)
    }
}

/// Replays a fixed list of lines, then reports the input as closed.
pub struct ScriptedCommandProvider {
    lines: Mutex<VecDeque<String>>,
}

impl ScriptedCommandProvider {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CommandProvider for ScriptedCommandProvider {
    async fn read_line(&self, prompt: PromptKind) -> Result<Option<String>> {
        let line = self
            .lines
            .lock()
            .map_err(|_| RuntimeError::InputClosed)?
            .pop_front();
        tracing::trace!(%prompt, ?line, "scripted input");
        Ok(line)
    }
}

/// Chooses the opponent's move for the current round.
///
/// Called only while the battle awaits the opponent's action.
pub trait OpponentPolicy: Send + Sync {
    fn choose(&self, battle: &Battle, rng: &mut dyn RngSource) -> OpponentMove;
}
