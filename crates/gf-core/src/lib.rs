//! gf-core: Guardian Force junction and summon logic
//!
//! This crate contains the party-side rules for summonable allies: the
//! roster partition between regular party members and Guardian Forces,
//! the AP skill-learning queues, junction bonds between party members and
//! their GFs, and the temporary battle-roster override used while a
//! summon is active. It is pure game logic with no I/O dependencies; the
//! host engine owns rendering, input, note parsing, and save files, and
//! hands this crate already-parsed static data.

pub mod actor;
pub mod battle;
pub mod config;
pub mod consts;
pub mod data;
pub mod game;
pub mod junction;
pub mod party;
pub mod scripting;

pub use actor::{Actor, Actors, LearningEntry, LearningQueue};
pub use battle::{
    Action, ActionItem, BattleResult, Enemy, Rewards, SummonError, SummonStyle, Troop,
    apply_summon_effects, check_battle_end, end_battle, process_victory,
};
pub use config::GfConfig;
pub use data::{ActorId, ClassId, EnemyId, GameData, ItemId, SkillId, SkillTypeId};
pub use game::GameState;
pub use party::Party;
