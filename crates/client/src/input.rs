//! Line-based player input.
use std::io::Write;

use async_trait::async_trait;
use runtime::{CommandProvider, PromptKind, Result, RuntimeError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Text shown before reading a line of the given kind.
pub fn prompt_label(prompt: PromptKind) -> &'static str {
    match prompt {
        PromptKind::Command => "> ",
        PromptKind::BattleAction { boss: true } => {
            "[attack | defend | parry | counter | use item] > "
        }
        PromptKind::BattleAction { boss: false } => {
            "[attack | defend | parry | counter | use item | run] > "
        }
        PromptKind::ItemIndex => "item # > ",
        PromptKind::WeaponIndex => "weapon # > ",
        PromptKind::ShopIndex => "buy # (blank to leave) > ",
        PromptKind::Quantity => "how many? > ",
        PromptKind::SkillChoice => "[strength | agility | luck | accuracy | defence] > ",
        PromptKind::SlotName => "slot > ",
    }
}

/// Reads player input one line at a time from any buffered async reader.
pub struct LineCommandProvider<R> {
    lines: Mutex<Lines<R>>,
    echo_prompts: bool,
}

/// The interactive provider used by the binary.
pub type StdinCommandProvider = LineCommandProvider<BufReader<Stdin>>;

impl StdinCommandProvider {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), true)
    }
}

impl<R> LineCommandProvider<R>
where
    R: AsyncBufRead + Unpin,
{
    pub fn new(reader: R, echo_prompts: bool) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
            echo_prompts,
        }
    }
}

#[async_trait]
impl<R> CommandProvider for LineCommandProvider<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn read_line(&self, prompt: PromptKind) -> Result<Option<String>> {
        if self.echo_prompts {
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", prompt_label(prompt)).map_err(RuntimeError::Input)?;
            stdout.flush().map_err(RuntimeError::Input)?;
        }

        let line = self
            .lines
            .lock()
            .await
            .next_line()
            .await
            .map_err(RuntimeError::Input)?;
        tracing::debug!(%prompt, ?line, "player input");
        Ok(line)
    }
}
