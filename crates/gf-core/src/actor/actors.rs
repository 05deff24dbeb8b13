//! Actor registry
//!
//! Owns every runtime actor, keyed by id. All cross-actor operations
//! (junctions, experience propagation) go through this registry rather
//! than holding references between actors.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use super::Actor;
use crate::data::{ActorId, GameData};

/// Registry of all runtime actors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Actors {
    map: HashMap<ActorId, Actor>,
}

impl Actors {
    pub fn new() -> Self {
        Actors::default()
    }

    /// Instantiate every actor in the database.
    pub fn setup_all(data: &GameData) -> Self {
        let mut actors = Actors::new();
        for id in data.actor_ids() {
            if let Some(actor) = Actor::setup(data, id) {
                actors.map.insert(id, actor);
            }
        }
        actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.map.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.map.get_mut(&id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.map.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.map.values()
    }

    pub fn insert(&mut self, actor: Actor) {
        self.map.insert(actor.id, actor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ActorData, ClassData, ClassId};

    #[test]
    fn test_setup_all_instantiates_every_actor() {
        let mut data = GameData::new();
        data.insert_class(ClassData {
            id: ClassId(1),
            name: "SeeD".to_string(),
            exp_basis: 30,
            exp_extra: 20,
            learnings: Vec::new(),
        });
        for id in [1u16, 2, 3] {
            data.insert_actor(ActorData {
                id: ActorId(id),
                name: format!("Actor {id}"),
                class_id: ClassId(1),
                initial_level: 1,
                max_hp: 100,
                is_guardian_force: id == 3,
            });
        }
        let actors = Actors::setup_all(&data);
        assert!(actors.contains(ActorId(1)));
        assert!(actors.contains(ActorId(2)));
        assert!(actors.actor(ActorId(3)).unwrap().is_gf());
        assert!(actors.actor(ActorId(4)).is_none());
    }
}
