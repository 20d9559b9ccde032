//! Player action domain.
//!
//! The battle vocabulary is fixed: `attack`, `defend`, `parry`, `counter`,
//! `use item` and `run`. Parsing is the only fallible step; everything after
//! that is resolved by [`crate::engine::Battle`].

pub mod error;
pub mod kind;

pub use error::ActionError;
pub use kind::PlayerAction;
