//! Enemy troop state
//!
//! The battle-side collection of enemies. Reward totals (experience,
//! gold, AP) are summed over the members dead when the battle is won.

use serde::{Deserialize, Serialize};

use crate::data::{EnemyId, GameData};

/// One enemy instance in the current battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub enemy_id: EnemyId,
    pub hp: i32,
}

impl Enemy {
    /// Spawn an enemy at full health. Unknown ids spawn dead, which
    /// keeps them out of every reward sum.
    pub fn new(data: &GameData, enemy_id: EnemyId) -> Enemy {
        let hp = data.enemy(enemy_id).map_or(0, |e| e.max_hp);
        Enemy { enemy_id, hp }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// The opposing side of a battle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Troop {
    pub members: Vec<Enemy>,
}

impl Troop {
    pub fn new(data: &GameData, enemy_ids: &[EnemyId]) -> Troop {
        Troop {
            members: enemy_ids.iter().map(|&id| Enemy::new(data, id)).collect(),
        }
    }

    pub fn is_all_dead(&self) -> bool {
        self.members.iter().all(Enemy::is_dead)
    }

    pub fn dead_members(&self) -> impl Iterator<Item = &Enemy> {
        self.members.iter().filter(|e| e.is_dead())
    }

    /// Total AP yielded by the enemies that died this battle.
    pub fn ap_total(&self, data: &GameData) -> u32 {
        self.dead_members()
            .filter_map(|e| data.enemy(e.enemy_id))
            .map(|e| e.ap)
            .sum()
    }

    pub fn exp_total(&self, data: &GameData) -> u64 {
        self.dead_members()
            .filter_map(|e| data.enemy(e.enemy_id))
            .map(|e| e.exp)
            .sum()
    }

    pub fn gold_total(&self, data: &GameData) -> u32 {
        self.dead_members()
            .filter_map(|e| data.enemy(e.enemy_id))
            .map(|e| e.gold)
            .sum()
    }
}
