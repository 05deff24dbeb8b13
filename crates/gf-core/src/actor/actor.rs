//! Runtime actor state
//!
//! Holds the mutable side of a character: level, experience, learned
//! skills, junction bond endpoints, and (for Guardian Forces) the AP
//! learning queue. Experience commits here are raw; junction-aware
//! propagation lives in the `junction` module and must be used for any
//! change that should reach bonded GFs.

use serde::{Deserialize, Serialize};

use super::LearningQueue;
use crate::consts::MAX_LEVEL;
use crate::data::{ActorId, ClassId, GameData, SkillId};

/// When a learning-queue scan runs, which level gate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTrigger {
    /// Initial setup and class change: every entry at or below the
    /// current level qualifies.
    Setup,
    /// Level-up: only entries gated exactly at the new level qualify.
    LevelUp,
}

/// A controllable character at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub class_id: ClassId,
    pub level: i32,
    pub exp: u64,
    pub hp: i32,
    pub max_hp: i32,
    is_guardian_force: bool,
    /// Skills learned through leveling, in learning order.
    pub skills: Vec<SkillId>,
    /// GF actor ids junctioned to this actor (master side of the bond).
    pub junctioned_gfs: Vec<ActorId>,
    /// The master this GF is junctioned to (GF side of the bond).
    pub junctioned_to: Option<ActorId>,
    pub learning: LearningQueue,
}

impl Actor {
    /// Build an actor from its static definition, learning every skill
    /// gated at or below the initial level and seeding the AP queue.
    pub fn setup(data: &GameData, id: ActorId) -> Option<Actor> {
        let record = data.actor(id)?;
        let class = data.class(record.class_id)?;
        let mut actor = Actor {
            id,
            name: record.name.clone(),
            class_id: record.class_id,
            level: record.initial_level,
            exp: class.exp_for_level(record.initial_level),
            hp: record.max_hp,
            max_hp: record.max_hp,
            is_guardian_force: record.is_guardian_force,
            skills: Vec::new(),
            junctioned_gfs: Vec::new(),
            junctioned_to: None,
            learning: LearningQueue::new(),
        };
        for learning in &class.learnings {
            if learning.level <= actor.level {
                actor.learn_skill(learning.skill_id);
            }
        }
        actor.scan_learnings(data, ScanTrigger::Setup);
        Some(actor)
    }

    /// Fixed at setup from the static definition; never changes.
    pub fn is_gf(&self) -> bool {
        self.is_guardian_force
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn learn_skill(&mut self, skill_id: SkillId) {
        if !self.skills.contains(&skill_id) {
            self.skills.push(skill_id);
        }
    }

    pub fn is_learned_skill(&self, skill_id: SkillId) -> bool {
        self.skills.contains(&skill_id)
    }

    /// A skill is usable if its AP entry is paid off, or it was learned
    /// normally and never had an AP gate.
    pub fn has_skill(&self, skill_id: SkillId) -> bool {
        if self.learning.contains(skill_id) {
            self.learning.is_complete(skill_id)
        } else {
            self.is_learned_skill(skill_id)
        }
    }

    /// Pull AP-gated entries from the current class into the learning
    /// queue. Existing entries keep their progress.
    pub fn scan_learnings(&mut self, data: &GameData, trigger: ScanTrigger) {
        let Some(class) = data.class(self.class_id) else {
            return;
        };
        for learning in &class.learnings {
            let Some(required) = learning.ap_required else {
                continue;
            };
            let gate_met = match trigger {
                ScanTrigger::Setup => learning.level <= self.level,
                ScanTrigger::LevelUp => learning.level == self.level,
            };
            if gate_met {
                self.learning.insert(learning.skill_id, required);
            }
        }
    }

    /// Commit a new experience total, moving the level to match the
    /// class curve. Does not propagate to junctioned GFs; callers that
    /// need propagation go through `junction::change_exp`.
    pub fn change_exp(&mut self, data: &GameData, new_exp: u64) {
        self.exp = new_exp;
        let Some(class) = data.class(self.class_id) else {
            return;
        };
        while self.level < MAX_LEVEL && self.exp >= class.exp_for_level(self.level + 1) {
            self.level_up(data);
        }
        while self.level > 1 && self.exp < class.exp_for_level(self.level) {
            self.level -= 1;
        }
    }

    /// Raise the level by one, learning skills gated at the new level
    /// and inserting any new AP entries.
    pub fn level_up(&mut self, data: &GameData) {
        self.level += 1;
        if let Some(class) = data.class(self.class_id) {
            let gated: Vec<SkillId> = class
                .learnings
                .iter()
                .filter(|l| l.level == self.level)
                .map(|l| l.skill_id)
                .collect();
            for skill_id in gated {
                self.learn_skill(skill_id);
            }
        }
        self.scan_learnings(data, ScanTrigger::LevelUp);
    }

    /// Switch class. With `keep_exp` the experience total carries over
    /// and the level is refit to the new curve; otherwise the level is
    /// kept and the total is rebased. Either way the AP queue is
    /// re-scanned against the new class.
    pub fn change_class(&mut self, data: &GameData, class_id: ClassId, keep_exp: bool) {
        self.class_id = class_id;
        let Some(class) = data.class(class_id) else {
            return;
        };
        if keep_exp {
            let mut level = 1;
            while level < MAX_LEVEL && self.exp >= class.exp_for_level(level + 1) {
                level += 1;
            }
            self.level = level;
        } else {
            self.exp = class.exp_for_level(self.level);
        }
        self.scan_learnings(data, ScanTrigger::Setup);
    }

    /// Credit or debit AP against the active learning target. Returns
    /// the skill that just completed, if any.
    pub fn gain_ap(&mut self, amount: i32) -> Option<SkillId> {
        self.learning.gain_ap(amount)
    }

    /// Override the active learning target (skill-selection UI hook).
    pub fn change_learning_skill(&mut self, skill_id: SkillId) {
        self.learning.change_target(skill_id);
    }
}
