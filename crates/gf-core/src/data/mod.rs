//! Static database
//!
//! Already-parsed definition records handed over by the host's data
//! loader. The note-tag scanning that produces these values (AP
//! requirements, summon directives, share flags) happens upstream; this
//! crate only ever sees strongly typed data.

mod actor;
mod class;
mod enemy;
mod skill;

pub use actor::ActorData;
pub use class::{ClassData, Learning};
pub use enemy::EnemyData;
pub use skill::{ItemData, SkillData, SummonDirective, UsableFlags};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Stable actor identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ActorId(pub u16);

/// Stable class identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ClassId(pub u16);

/// Stable skill identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SkillId(pub u16);

/// Stable item identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ItemId(pub u16);

/// Stable enemy identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct EnemyId(pub u16);

/// Skill-type category identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct SkillTypeId(pub u8);

/// The full static database for one game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameData {
    actors: HashMap<ActorId, ActorData>,
    classes: HashMap<ClassId, ClassData>,
    skills: HashMap<SkillId, SkillData>,
    items: HashMap<ItemId, ItemData>,
    enemies: HashMap<EnemyId, EnemyData>,
    /// Actor ids forming the initial party roster, in setup order.
    pub starting_members: Vec<ActorId>,
}

impl GameData {
    pub fn new() -> Self {
        GameData::default()
    }

    pub fn insert_actor(&mut self, record: ActorData) {
        self.actors.insert(record.id, record);
    }

    pub fn insert_class(&mut self, record: ClassData) {
        self.classes.insert(record.id, record);
    }

    pub fn insert_skill(&mut self, record: SkillData) {
        self.skills.insert(record.id, record);
    }

    pub fn insert_item(&mut self, record: ItemData) {
        self.items.insert(record.id, record);
    }

    pub fn insert_enemy(&mut self, record: EnemyData) {
        self.enemies.insert(record.id, record);
    }

    pub fn actor(&self, id: ActorId) -> Option<&ActorData> {
        self.actors.get(&id)
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassData> {
        self.classes.get(&id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&SkillData> {
        self.skills.get(&id)
    }

    pub fn item(&self, id: ItemId) -> Option<&ItemData> {
        self.items.get(&id)
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&EnemyData> {
        self.enemies.get(&id)
    }

    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.actors.keys().copied()
    }

    /// Display name for a skill, empty when the id is unknown.
    pub fn skill_name(&self, id: SkillId) -> &str {
        self.skill(id).map_or("", |s| s.name.as_str())
    }
}
