//! Battle rewards
//!
//! Victory computes one reward bundle from the dead enemies, announces
//! it, then applies experience (with junction propagation) followed by
//! AP. The AP total is delivered undivided to every junctioned GF of
//! every surviving party member.

use serde::{Deserialize, Serialize};

use super::Troop;
use crate::game::GameState;
use crate::junction;

/// Spoils of a won battle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    pub exp: u64,
    pub gold: u32,
    pub ap: u32,
}

/// Sum the rewards over the troop's dead members.
pub fn make_rewards(state: &GameState, troop: &Troop) -> Rewards {
    Rewards {
        exp: troop.exp_total(&state.data),
        gold: troop.gold_total(&state.data),
        ap: troop.ap_total(&state.data),
    }
}

/// Announce the reward bundle through the message sink.
pub fn display_rewards(state: &mut GameState, rewards: Rewards) {
    if rewards.exp > 0 {
        state.message(format!("{} EXP received!", rewards.exp));
    }
    if rewards.gold > 0 {
        state.message(format!("{} G found!", rewards.gold));
    }
    if rewards.ap > 0 {
        let text = state.config.format_ap_gain(rewards.ap);
        state.message(text);
    }
}

/// Apply the reward bundle: experience to every party member (junction
/// propagation included), then the full AP total to each junctioned GF
/// of each surviving member.
pub fn gain_rewards(state: &mut GameState, rewards: Rewards) {
    for id in state.party.members().to_vec() {
        junction::gain_exp(&mut state.actors, &state.data, id, rewards.exp);
    }
    for id in state.party.members().to_vec() {
        let survivor = state.actors.actor(id).is_some_and(|a| a.is_alive());
        if !survivor {
            continue;
        }
        for gf_id in junction::junctioned_actors(&state.actors, id) {
            state.gain_ap(gf_id, rewards.ap as i32, true);
        }
    }
}
