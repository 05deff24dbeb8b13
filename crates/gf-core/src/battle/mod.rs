//! Battle flow
//!
//! Battle-end evaluation and the pieces it coordinates: troop state,
//! reward computation, and summon resolution. The ordering contracts
//! live here: a wiped summon roster is force-cleared before defeat is
//! judged, and the override never survives the end of a battle.

mod action;
mod rewards;
mod troop;

pub use action::{Action, ActionItem, SummonError, SummonStyle, apply_summon_effects};
pub use rewards::{Rewards, display_rewards, gain_rewards, make_rewards};
pub use troop::{Enemy, Troop};

use crate::game::GameState;

/// How a battle concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleResult {
    Victory,
    Defeat,
}

/// Evaluate whether the battle is over. When the active lineup is a
/// wiped summon roster, the override is cleared first so defeat is
/// judged against the real party; a victory is checked before defeat so
/// mutual annihilation still counts as a win.
pub fn check_battle_end(state: &mut GameState, troop: &Troop) -> Option<BattleResult> {
    if state.party.summoned() && state.party.is_all_dead(&state.actors) {
        state.party.clear_summons();
    }
    if troop.is_all_dead() {
        return Some(BattleResult::Victory);
    }
    if state.party.is_all_dead(&state.actors) {
        return Some(BattleResult::Defeat);
    }
    None
}

/// Run the victory reward flow: compute, announce, apply.
pub fn process_victory(state: &mut GameState, troop: &Troop) {
    let rewards = make_rewards(state, troop);
    display_rewards(state, rewards);
    gain_rewards(state, rewards);
}

/// Close out a battle, win or lose: the summon override never outlives
/// the battle.
pub fn end_battle(state: &mut GameState) {
    state.party.clear_summons();
}
