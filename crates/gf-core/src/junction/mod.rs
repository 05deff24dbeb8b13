//! Junction bonds
//!
//! A Guardian Force junctions to at most one master; a master holds an
//! ordered set of junctioned GFs. The two sides must agree (a GF points
//! at master M exactly when M's set contains the GF), and `toggle` is
//! the one operation that keeps the pair consistent on its own. The raw
//! setters exist for the orchestration layer and leave consistency to
//! the caller.

mod sharing;

pub use sharing::{added_skill_types, effective_skills};

use crate::actor::Actors;
use crate::data::{ActorId, GameData};

/// Set the GF-side bond pointer. Raw setter; pair with `add_junction` /
/// `remove_junction` to keep both sides consistent.
pub fn set_junction(actors: &mut Actors, gf_id: ActorId, master_id: Option<ActorId>) {
    if let Some(gf) = actors.actor_mut(gf_id) {
        gf.junctioned_to = master_id;
    }
}

/// Insert a GF into a master's junction set. No-op when already present.
pub fn add_junction(actors: &mut Actors, master_id: ActorId, gf_id: ActorId) {
    if let Some(master) = actors.actor_mut(master_id) {
        if !master.junctioned_gfs.contains(&gf_id) {
            master.junctioned_gfs.push(gf_id);
        }
    }
}

/// Remove a GF from a master's junction set. No-op when absent.
pub fn remove_junction(actors: &mut Actors, master_id: ActorId, gf_id: ActorId) {
    if let Some(master) = actors.actor_mut(master_id) {
        master.junctioned_gfs.retain(|&id| id != gf_id);
    }
}

/// The bond toggle protocol: unbind the GF from its current master if
/// it has one, otherwise bind it to the selected master. Both sides of
/// the bond are updated together. Calls that violate the roster
/// partition (a non-GF on the GF side, a GF as master, an unknown id)
/// are ignored, so a bond can never form a propagation cycle.
pub fn toggle(actors: &mut Actors, master_id: ActorId, gf_id: ActorId) {
    let Some(gf) = actors.actor(gf_id) else {
        return;
    };
    if !gf.is_gf() {
        return;
    }
    match gf.junctioned_to {
        Some(bound_master) => {
            remove_junction(actors, bound_master, gf_id);
            set_junction(actors, gf_id, None);
        }
        None => {
            let master_eligible = actors.actor(master_id).is_some_and(|m| !m.is_gf());
            if master_eligible {
                add_junction(actors, master_id, gf_id);
                set_junction(actors, gf_id, Some(master_id));
            }
        }
    }
}

/// Whether this actor is a GF currently junctioned to a master.
pub fn junctioned(actors: &Actors, id: ActorId) -> bool {
    actors
        .actor(id)
        .is_some_and(|actor| actor.is_gf() && actor.junctioned_to.is_some())
}

/// The GFs junctioned to a master, in junction order.
pub fn junctioned_actors(actors: &Actors, master_id: ActorId) -> Vec<ActorId> {
    actors
        .actor(master_id)
        .map(|master| master.junctioned_gfs.clone())
        .unwrap_or_default()
}

/// The master a GF is junctioned to, if any.
pub fn junctioned_to(actors: &Actors, gf_id: ActorId) -> Option<ActorId> {
    actors.actor(gf_id).and_then(|gf| gf.junctioned_to)
}

/// Commit a new experience total for an actor, splitting the delta
/// evenly across its junctioned GFs first. Each GF receives
/// `delta / gf_count` (integer division) before the master's own total
/// is committed; with no junctioned GFs nothing propagates.
pub fn change_exp(actors: &mut Actors, data: &GameData, id: ActorId, new_exp: u64) {
    let Some(actor) = actors.actor(id) else {
        return;
    };
    let delta = new_exp as i64 - actor.exp as i64;
    let gfs = actor.junctioned_gfs.clone();
    if !gfs.is_empty() {
        let share = delta / gfs.len() as i64;
        for gf_id in gfs {
            if let Some(gf) = actors.actor(gf_id) {
                let gf_total = (gf.exp as i64 + share).max(0) as u64;
                change_exp(actors, data, gf_id, gf_total);
            }
        }
    }
    if let Some(actor) = actors.actor_mut(id) {
        actor.change_exp(data, new_exp);
    }
}

/// Add `amount` experience to an actor, propagating through junctions.
pub fn gain_exp(actors: &mut Actors, data: &GameData, id: ActorId, amount: u64) {
    let Some(actor) = actors.actor(id) else {
        return;
    };
    let total = actor.exp.saturating_add(amount);
    change_exp(actors, data, id, total);
}
