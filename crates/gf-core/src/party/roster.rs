//! Roster partition
//!
//! The party keeps regular members and Guardian Forces in two disjoint
//! ordered sequences. Which side an actor lands on is decided purely by
//! its static guardian-force flag; GFs never count against the battle
//! party limit.

use serde::{Deserialize, Serialize};

use crate::actor::Actors;
use crate::data::ActorId;

/// The player's party: main members, the GF pool, and the battle-scoped
/// summon override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    members: Vec<ActorId>,
    guardian_forces: Vec<ActorId>,
    pub(super) summons: Vec<ActorId>,
}

impl Party {
    pub fn new() -> Self {
        Party::default()
    }

    /// Partition the starting lineup into members and GFs, in setup
    /// order. Ids without a runtime actor are skipped.
    pub fn setup_starting_members(&mut self, actors: &Actors, starting: &[ActorId]) {
        self.members.clear();
        self.guardian_forces.clear();
        for &id in starting {
            self.add_actor(actors, id);
        }
    }

    /// Add an actor to whichever side of the partition it belongs on.
    /// Adding an id already present is a no-op.
    pub fn add_actor(&mut self, actors: &Actors, id: ActorId) {
        let Some(actor) = actors.actor(id) else {
            return;
        };
        let side = if actor.is_gf() {
            &mut self.guardian_forces
        } else {
            &mut self.members
        };
        if !side.contains(&id) {
            side.push(id);
        }
    }

    /// Remove an actor from its side of the partition. Absent ids are a
    /// no-op.
    pub fn remove_actor(&mut self, actors: &Actors, id: ActorId) {
        let Some(actor) = actors.actor(id) else {
            return;
        };
        let side = if actor.is_gf() {
            &mut self.guardian_forces
        } else {
            &mut self.members
        };
        side.retain(|&member| member != id);
    }

    /// Main party members in join order.
    pub fn members(&self) -> &[ActorId] {
        &self.members
    }

    /// The Guardian Force pool in join order.
    pub fn guardian_forces(&self) -> &[ActorId] {
        &self.guardian_forces
    }

    /// Every owned actor: members first, then GFs. The event-scripting
    /// "all actors" iteration target.
    pub fn all_members(&self) -> Vec<ActorId> {
        let mut all = self.members.clone();
        all.extend_from_slice(&self.guardian_forces);
        all
    }

    /// Target pool for an item: the GF pool for GF-targeted items, the
    /// main party otherwise.
    pub fn item_candidates(&self, gf_item: bool) -> &[ActorId] {
        if gf_item {
            &self.guardian_forces
        } else {
            &self.members
        }
    }
}
