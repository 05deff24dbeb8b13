//! Skill and item definition records

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{ActorId, ItemId, SkillId, SkillTypeId};

bitflags! {
    /// Behavior flags on skills and items.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct UsableFlags: u8 {
        /// A Guardian Force never shares this skill with its master.
        const NO_SHARE = 0x01;
        /// Resolving this action dismisses an active summon.
        const DISMISS_SUMMON = 0x02;
        /// This item targets the Guardian Force pool instead of the
        /// main party.
        const GF_ITEM = 0x04;
    }
}

// Manual serde impl for UsableFlags
impl Serialize for UsableFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UsableFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(UsableFlags::from_bits_truncate(bits))
    }
}

/// Summon effect declared on a skill or item.
///
/// `style` is kept as the raw authored byte; an out-of-range value is a
/// configuration error reported when the summon resolves, never silently
/// replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummonDirective {
    pub targets: Vec<ActorId>,
    pub style: Option<u8>,
}

/// Static definition of a skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillData {
    pub id: SkillId,
    pub name: String,
    pub stype_id: SkillTypeId,
    pub flags: UsableFlags,
    pub summon: Option<SummonDirective>,
}

/// Static definition of a consumable item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemData {
    pub id: ItemId,
    pub name: String,
    pub flags: UsableFlags,
    pub summon: Option<SummonDirective>,
}
