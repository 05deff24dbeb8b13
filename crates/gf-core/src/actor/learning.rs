//! AP ledger and skill-learning queue
//!
//! Each Guardian Force carries an insertion-ordered queue of skills that
//! cost AP to finish learning. AP credits only the single active target;
//! when that entry completes, the target advances through the queue in
//! insertion order. Entries are never removed once added.

use serde::{Deserialize, Serialize};

use crate::data::SkillId;

/// One queued skill: AP earned so far against the AP required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningEntry {
    pub skill_id: SkillId,
    pub earned: u32,
    pub required: u32,
}

impl LearningEntry {
    pub fn is_complete(&self) -> bool {
        self.earned >= self.required
    }
}

/// Ordered AP queue with a single active learning target.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningQueue {
    entries: Vec<LearningEntry>,
    active: Option<SkillId>,
}

impl LearningQueue {
    pub fn new() -> Self {
        LearningQueue::default()
    }

    /// Add a skill with the given AP requirement. Skills already queued
    /// keep their progress; insertion order is permanent. A queue with
    /// no active target adopts the new entry, so entries arriving after
    /// setup (a level-up or class-change scan) are never stranded
    /// without a target.
    pub fn insert(&mut self, skill_id: SkillId, required: u32) {
        if !self.contains(skill_id) {
            self.entries.push(LearningEntry {
                skill_id,
                earned: 0,
                required,
            });
            if self.active.is_none() {
                self.active = Some(skill_id);
            }
        }
    }

    /// Credit `amount` AP (may be negative) to the active target,
    /// clamped into `[0, required]`, then advance. Returns the skill
    /// that just completed, if this gain finished it.
    ///
    /// With no active target, or a target not present in the queue,
    /// this is a silent no-op.
    pub fn gain_ap(&mut self, amount: i32) -> Option<SkillId> {
        let active = self.active?;
        let entry = self.entries.iter_mut().find(|e| e.skill_id == active)?;
        let was_complete = entry.is_complete();
        let earned = (entry.earned as i64 + amount as i64).clamp(0, entry.required as i64);
        entry.earned = earned as u32;
        let learned = (!was_complete && entry.is_complete()).then_some(active);
        self.advance();
        learned
    }

    /// Override the active target. The id is not validated against the
    /// queue; gains against an unknown id are no-ops.
    pub fn change_target(&mut self, skill_id: SkillId) {
        self.active = Some(skill_id);
        self.advance();
    }

    /// Move the active target off a completed entry: next entry in
    /// insertion order, else the first incomplete entry, else stay on
    /// the last entry (everything is learned for now).
    pub fn advance(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        let Some(index) = self.entries.iter().position(|e| e.skill_id == active) else {
            return;
        };
        if !self.entries[index].is_complete() {
            return;
        }
        if let Some(next) = self.entries.get(index + 1) {
            self.active = Some(next.skill_id);
        } else if let Some(first) = self.entries.iter().find(|e| !e.is_complete()) {
            self.active = Some(first.skill_id);
        } else {
            self.active = Some(self.entries[index].skill_id);
        }
    }

    pub fn contains(&self, skill_id: SkillId) -> bool {
        self.entries.iter().any(|e| e.skill_id == skill_id)
    }

    /// Whether the queue holds this skill with its AP fully paid off.
    pub fn is_complete(&self, skill_id: SkillId) -> bool {
        self.entry(skill_id).is_some_and(|e| e.is_complete())
    }

    pub fn entry(&self, skill_id: SkillId) -> Option<&LearningEntry> {
        self.entries.iter().find(|e| e.skill_id == skill_id)
    }

    pub fn entries(&self) -> &[LearningEntry] {
        &self.entries
    }

    /// The current active learning target, if any.
    pub fn active_skill(&self) -> Option<SkillId> {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
