//! Skill and skill-type sharing across junction bonds
//!
//! A master sees its junctioned GFs' finished skills alongside its own,
//! minus anything the author marked unshareable, and gains their skill
//! categories minus the GF-exclusive ones. A GF's own menu hides the
//! summon category so a GF never lists its own summon entry.

use crate::actor::Actors;
use crate::config::GfConfig;
use crate::data::{ActorId, GameData, SkillId, SkillTypeId, UsableFlags};

/// The effective skill list for an actor: its own learned skills with
/// in-progress AP entries removed, unioned with every shareable complete
/// skill of its junctioned GFs.
pub fn effective_skills(actors: &Actors, data: &GameData, id: ActorId) -> Vec<SkillId> {
    let Some(actor) = actors.actor(id) else {
        return Vec::new();
    };
    let mut list: Vec<SkillId> = actor
        .skills
        .iter()
        .copied()
        .filter(|&skill_id| {
            !actor.learning.contains(skill_id) || actor.learning.is_complete(skill_id)
        })
        .collect();
    for &gf_id in &actor.junctioned_gfs {
        for skill_id in effective_skills(actors, data, gf_id) {
            let no_share = data
                .skill(skill_id)
                .is_some_and(|s| s.flags.contains(UsableFlags::NO_SHARE));
            if !no_share && !list.contains(&skill_id) {
                list.push(skill_id);
            }
        }
    }
    list
}

/// The skill-type categories available on an actor's menu: its own
/// skills' types plus those of its junctioned GFs, with GF-exclusive
/// types never crossing the bond and the summon category hidden from a
/// GF's own menu.
pub fn added_skill_types(
    actors: &Actors,
    data: &GameData,
    config: &GfConfig,
    id: ActorId,
) -> Vec<SkillTypeId> {
    let Some(actor) = actors.actor(id) else {
        return Vec::new();
    };
    let mut types = own_skill_types(actors, data, id);
    for &gf_id in &actor.junctioned_gfs {
        for stype in own_skill_types(actors, data, gf_id) {
            if !types.contains(&stype) && !config.is_gf_exclusive(stype) {
                types.push(stype);
            }
        }
    }
    if actor.is_gf() {
        types.retain(|&stype| stype != config.summon_skill_type);
    }
    types.sort();
    types
}

/// Unique skill types of an actor's own learned skills.
fn own_skill_types(actors: &Actors, data: &GameData, id: ActorId) -> Vec<SkillTypeId> {
    let Some(actor) = actors.actor(id) else {
        return Vec::new();
    };
    let mut types = Vec::new();
    for &skill_id in &actor.skills {
        if let Some(skill) = data.skill(skill_id) {
            if !types.contains(&skill.stype_id) {
                types.push(skill.stype_id);
            }
        }
    }
    types
}
