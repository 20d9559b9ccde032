//! Skill system.
//!
//! Skills are the only stat layer in this game: there are no derived stats,
//! buffs or conditions. Everything that scales with a skill reads it directly
//! through [`SkillSet::get`] and a [`crate::config::PercentFormula`].

pub mod skills;

pub use skills::{SkillKind, SkillSet};
