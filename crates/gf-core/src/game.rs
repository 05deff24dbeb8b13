//! Game state aggregate
//!
//! Owns the static database, configuration, runtime actors, party, and
//! the message sink the host UI drains each update. All mutation flows
//! through the operations on this aggregate or its components; the host
//! environment is single-threaded, so plain `&mut` access is the whole
//! concurrency story.

use serde::{Deserialize, Serialize};

use crate::actor::Actors;
use crate::config::GfConfig;
use crate::data::{ActorId, GameData, SkillId};

/// Top-level state for the Guardian Force subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GfConfig,
    pub data: GameData,
    pub actors: Actors,
    pub party: crate::party::Party,

    /// Messages for the current update cycle
    #[serde(skip)]
    pub messages: Vec<String>,

    /// Permanent message history
    #[serde(skip)]
    pub message_history: Vec<String>,
}

impl GameState {
    /// Build a fresh game: instantiate every actor and partition the
    /// starting lineup.
    pub fn new(data: GameData, config: GfConfig) -> Self {
        let actors = Actors::setup_all(&data);
        let mut party = crate::party::Party::new();
        party.setup_starting_members(&actors, &data.starting_members);
        GameState {
            config,
            data,
            actors,
            party,
            messages: Vec::new(),
            message_history: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg_str = msg.into();
        self.messages.push(msg_str.clone());
        self.message_history.push(msg_str);
    }

    /// Clear messages
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Credit or debit an actor's AP, announcing a newly learned skill
    /// when `announce` is set. Empty or absent queues absorb the gain
    /// silently.
    pub fn gain_ap(&mut self, id: ActorId, amount: i32, announce: bool) {
        let Some(actor) = self.actors.actor_mut(id) else {
            return;
        };
        let learned = actor.gain_ap(amount);
        if announce {
            if let Some(skill_id) = learned {
                let name = self.data.skill_name(skill_id).to_string();
                if !name.is_empty() {
                    self.message(format!("{name} learned!"));
                }
            }
        }
    }

    /// Override an actor's active learning target.
    pub fn change_learning_skill(&mut self, id: ActorId, skill_id: SkillId) {
        if let Some(actor) = self.actors.actor_mut(id) {
            actor.change_learning_skill(skill_id);
        }
    }

    /// Whether an actor can currently use a skill, counting finished AP
    /// entries and ordinarily learned skills.
    pub fn has_skill(&self, id: ActorId, skill_id: SkillId) -> bool {
        self.actors
            .actor(id)
            .is_some_and(|actor| actor.has_skill(skill_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ActorData, ClassData, ClassId, Learning, SkillData, SkillTypeId, UsableFlags};

    fn fixture() -> GameState {
        let mut data = GameData::new();
        data.insert_class(ClassData {
            id: ClassId(1),
            name: "Guardian".to_string(),
            exp_basis: 30,
            exp_extra: 20,
            learnings: vec![Learning {
                level: 1,
                skill_id: SkillId(10),
                ap_required: Some(30),
            }],
        });
        data.insert_skill(SkillData {
            id: SkillId(10),
            name: "Thunder".to_string(),
            stype_id: SkillTypeId(1),
            flags: UsableFlags::empty(),
            summon: None,
        });
        data.insert_actor(ActorData {
            id: ActorId(5),
            name: "Quezacotl".to_string(),
            class_id: ClassId(1),
            initial_level: 1,
            max_hp: 300,
            is_guardian_force: true,
        });
        data.starting_members = vec![ActorId(5)];
        GameState::new(data, GfConfig::default())
    }

    #[test]
    fn test_new_partitions_starting_members() {
        let state = fixture();
        assert!(state.party.members().is_empty());
        assert_eq!(state.party.guardian_forces(), &[ActorId(5)]);
    }

    #[test]
    fn test_gain_ap_announces_learned_skill() {
        let mut state = fixture();
        state.gain_ap(ActorId(5), 30, true);
        assert_eq!(state.messages, vec!["Thunder learned!".to_string()]);
        assert!(state.has_skill(ActorId(5), SkillId(10)));
    }

    #[test]
    fn test_gain_ap_silent_without_announce() {
        let mut state = fixture();
        state.gain_ap(ActorId(5), 30, false);
        assert!(state.messages.is_empty());
        assert!(state.has_skill(ActorId(5), SkillId(10)));
    }

    #[test]
    fn test_learned_skill_without_record_is_silent() {
        let mut state = fixture();
        // Learning entry pointing at a skill the database never defines.
        let actor = state.actors.actor_mut(ActorId(5)).unwrap();
        actor.learning.insert(SkillId(42), 10);
        actor.change_learning_skill(SkillId(42));
        state.gain_ap(ActorId(5), 10, true);
        assert!(state.messages.is_empty());
        assert!(state.has_skill(ActorId(5), SkillId(42)));
    }

    #[test]
    fn test_gain_ap_unknown_actor_is_noop() {
        let mut state = fixture();
        state.gain_ap(ActorId(99), 30, true);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_state_serializes() {
        let state = fixture();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.party.guardian_forces(), &[ActorId(5)]);
        assert_eq!(
            back.actors.actor(ActorId(5)).unwrap().learning.entries().len(),
            1
        );
    }
}
