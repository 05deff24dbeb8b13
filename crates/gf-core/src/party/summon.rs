//! Summon roster override
//!
//! While a summon is active the battle lineup is the override sequence
//! instead of the default roster. An empty override means "no summon".
//! The override is battle-scoped: it is cleared by a dismissing action,
//! force-cleared when the active lineup is wiped out, and always cleared
//! when battle ends.

use super::Party;
use crate::actor::Actors;
use crate::consts::MAX_BATTLE_MEMBERS;
use crate::data::ActorId;

impl Party {
    /// Whether a summon override is active.
    pub fn summoned(&self) -> bool {
        !self.summons.is_empty()
    }

    /// Install a summon override. Replaces any previous one; callers
    /// check `summoned()` first per the action-resolution contract.
    pub fn set_summons(&mut self, summons: Vec<ActorId>) {
        self.summons = summons;
    }

    /// Drop the override, restoring the default battle roster.
    pub fn clear_summons(&mut self) {
        self.summons.clear();
    }

    /// The acting battle lineup: the summon override when one is
    /// active, otherwise the leading main-party members. A style-3
    /// override may exceed the normal battle size.
    pub fn battle_members(&self) -> Vec<ActorId> {
        if self.summoned() {
            self.summons.clone()
        } else {
            self.members()
                .iter()
                .take(MAX_BATTLE_MEMBERS)
                .copied()
                .collect()
        }
    }

    /// Whether every actor in the acting battle lineup is dead.
    pub fn is_all_dead(&self, actors: &Actors) -> bool {
        self.battle_members()
            .iter()
            .filter_map(|&id| actors.actor(id))
            .all(|actor| !actor.is_alive())
    }
}
