//! Narrative output.
//!
//! Battle events carry numbers; this module turns them into lines of text and
//! hands them to a [`NarrativeSink`]. How a line is rendered (color, delay) is
//! the sink's business.

mod narrate;
mod sink;

pub use narrate::describe;
pub use sink::{MemorySink, NarrativeSink, Tone};
