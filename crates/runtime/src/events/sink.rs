use std::sync::Mutex;

/// Mood of a narrative line, used by sinks to pick a style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Tone {
    /// Neutral information and prompts.
    Info,
    /// Good news for the player.
    Success,
    /// Harm to the player.
    Danger,
    /// Boss flavor and warnings.
    Warning,
    /// HP readouts.
    Status,
    /// Encounter banners and milestones.
    Banner,
}

/// Receives narrative lines in order.
pub trait NarrativeSink: Send + Sync {
    fn emit(&self, tone: Tone, text: &str);
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Tone, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Tone, String)> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|(_, line)| line.contains(needle))
    }
}

impl NarrativeSink for MemorySink {
    fn emit(&self, tone: Tone, text: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((tone, text.to_string()));
        }
    }
}
