//! Enemy definition records

use serde::{Deserialize, Serialize};

use super::EnemyId;

/// Static definition of an enemy type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyData {
    pub id: EnemyId,
    pub name: String,
    pub level: i32,
    pub max_hp: i32,
    pub exp: u64,
    pub gold: u32,
    /// AP awarded when this enemy dies. Zero when the author omitted it.
    pub ap: u32,
}
