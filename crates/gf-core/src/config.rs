//! Subsystem configuration
//!
//! An explicit, immutable configuration value built once by the host and
//! passed into the operations that need it. Terminology strings mirror
//! what the engine displays; skill-type settings control which categories
//! are private to Guardian Forces.

use serde::{Deserialize, Serialize};

use crate::data::SkillTypeId;

/// Guardian Force subsystem settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GfConfig {
    /// Display term for the AP currency.
    pub ap_term: String,
    /// Template for the post-battle AP message. `%1` is the amount,
    /// `%2` the AP term.
    pub ap_gain_message: String,
    /// Display term for the junction command.
    pub junction_term: String,
    /// Skill-type categories usable only by Guardian Forces. These never
    /// appear on a regular actor's menu, even through a junction.
    pub gf_exclusive_skill_types: Vec<SkillTypeId>,
    /// The skill type holding summon skills, hidden from a GF's own list.
    pub summon_skill_type: SkillTypeId,
    /// Summon style applied when a skill or item omits one. Stored raw;
    /// validated when a summon actually resolves.
    pub default_summon_style: u8,
}

impl Default for GfConfig {
    fn default() -> Self {
        GfConfig {
            ap_term: "AP".to_string(),
            ap_gain_message: "Gained %1 %2!".to_string(),
            junction_term: "Junction".to_string(),
            gf_exclusive_skill_types: vec![SkillTypeId(2)],
            summon_skill_type: SkillTypeId(3),
            default_summon_style: 0,
        }
    }
}

impl GfConfig {
    /// Format the post-battle AP announcement.
    pub fn format_ap_gain(&self, ap: u32) -> String {
        self.ap_gain_message
            .replacen("%1", &ap.to_string(), 1)
            .replacen("%2", &self.ap_term, 1)
    }

    /// Whether a skill type is reserved for Guardian Forces.
    pub fn is_gf_exclusive(&self, stype: SkillTypeId) -> bool {
        self.gf_exclusive_skill_types.contains(&stype)
    }
}
