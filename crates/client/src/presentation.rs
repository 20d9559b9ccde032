//! Terminal output for narrative lines.
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use runtime::{NarrativeSink, Tone};

/// Foreground color for each tone.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => Color::Reset,
        Tone::Success => Color::Green,
        Tone::Danger => Color::Red,
        Tone::Warning => Color::Yellow,
        Tone::Status => Color::Cyan,
        Tone::Banner => Color::Magenta,
    }
}

/// Prints narrative lines to stdout in color.
///
/// With a non-zero delay, characters are written one by one.
pub struct TerminalSink {
    delay: Duration,
}

impl TerminalSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn write_line(&self, tone: Tone, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        queue!(stdout, SetForegroundColor(tone_color(tone)))?;
        if tone == Tone::Banner {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }

        if self.delay.is_zero() {
            queue!(stdout, Print(text))?;
        } else {
            for ch in text.chars() {
                execute!(stdout, Print(ch))?;
                std::thread::sleep(self.delay);
            }
        }

        execute!(
            stdout,
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\n")
        )
    }
}

impl NarrativeSink for TerminalSink {
    fn emit(&self, tone: Tone, text: &str) {
        if let Err(err) = self.write_line(tone, text) {
            tracing::warn!(%err, %tone, "failed to write narrative line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harm_and_good_news_differ() {
        assert_eq!(tone_color(Tone::Danger), Color::Red);
        assert_ne!(tone_color(Tone::Danger), tone_color(Tone::Success));
    }
}
