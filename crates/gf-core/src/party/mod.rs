//! Party system
//!
//! Roster partition between main members and Guardian Forces, plus the
//! battle-scoped summon override.

mod roster;
mod summon;

pub use roster::Party;
