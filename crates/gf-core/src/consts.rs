//! Engine constants shared across the subsystem.

/// Number of actors fielded in battle when no summon override is active.
/// The Guardian Force pool is not bound by this limit, and neither is a
/// style-3 (augment) summon roster.
pub const MAX_BATTLE_MEMBERS: usize = 4;

/// Maximum actor level; experience past the final threshold is kept but
/// no further levels are gained.
pub const MAX_LEVEL: i32 = 99;
