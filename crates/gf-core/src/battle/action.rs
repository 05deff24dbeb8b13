//! Summon resolution for battle actions
//!
//! When a skill or item carrying a summon directive resolves, the party
//! lineup is overridden according to the summon style. The dismiss tag
//! is evaluated second against the same action, so a single action can
//! summon and immediately dismiss. An out-of-range style byte is a
//! configuration error surfaced to the caller, never a silent default.

use serde::{Deserialize, Serialize};
use strum::{Display, FromRepr};
use thiserror::Error;

use crate::data::{ActorId, ItemId, SkillId, SummonDirective, UsableFlags};
use crate::game::GameState;

/// How a summon roster replaces the active lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromRepr)]
#[repr(u8)]
pub enum SummonStyle {
    /// The summons replace the entire party.
    ReplaceParty = 0,
    /// The acting actor stays, the summons join, everyone else leaves.
    JoinSubject = 1,
    /// The summons take the acting actor's slot; the rest are untouched.
    ReplaceSubject = 2,
    /// The summons are appended, even past the normal party size.
    Augment = 3,
}

/// Fatal summon configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummonError {
    #[error("invalid summon style {0}: expected a value from 0 to 3")]
    InvalidStyle(u8),
}

/// What a battle action resolves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionItem {
    Skill(SkillId),
    Item(ItemId),
}

/// A resolving battle action: who acts, with what.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub subject: ActorId,
    pub item: ActionItem,
}

impl Action {
    pub fn skill(subject: ActorId, id: SkillId) -> Action {
        Action {
            subject,
            item: ActionItem::Skill(id),
        }
    }

    pub fn item(subject: ActorId, id: ItemId) -> Action {
        Action {
            subject,
            item: ActionItem::Item(id),
        }
    }

    fn effects<'a>(&self, state: &'a GameState) -> (Option<&'a SummonDirective>, UsableFlags) {
        match self.item {
            ActionItem::Skill(id) => state
                .data
                .skill(id)
                .map_or((None, UsableFlags::empty()), |s| {
                    (s.summon.as_ref(), s.flags)
                }),
            ActionItem::Item(id) => state
                .data
                .item(id)
                .map_or((None, UsableFlags::empty()), |i| {
                    (i.summon.as_ref(), i.flags)
                }),
        }
    }
}

/// Resolve the summon and dismiss effects of an action, in that order.
/// Returns whether the action was marked successful (for the host's
/// message and animation handling). A summon only applies when none is
/// active; a dismiss only applies when one is.
pub fn apply_summon_effects(state: &mut GameState, action: &Action) -> Result<bool, SummonError> {
    let (directive, flags) = action.effects(state);
    let directive = directive.cloned();
    let mut success = false;

    if let Some(directive) = directive {
        if !state.party.summoned() {
            let style_raw = directive.style.unwrap_or(state.config.default_summon_style);
            let style =
                SummonStyle::from_repr(style_raw).ok_or(SummonError::InvalidStyle(style_raw))?;
            let roster = build_roster(state, action.subject, &directive.targets, style);
            state.party.set_summons(roster);
            success = true;
        }
    }

    if state.party.summoned() && flags.contains(UsableFlags::DISMISS_SUMMON) {
        state.party.clear_summons();
        success = true;
    }

    Ok(success)
}

/// Assemble the override roster for a summon style.
fn build_roster(
    state: &GameState,
    subject: ActorId,
    targets: &[ActorId],
    style: SummonStyle,
) -> Vec<ActorId> {
    let mut roster = Vec::new();
    match style {
        SummonStyle::ReplaceParty => {
            roster.extend_from_slice(targets);
        }
        SummonStyle::JoinSubject => {
            roster.push(subject);
            roster.extend_from_slice(targets);
        }
        SummonStyle::ReplaceSubject => {
            let mut replaced = false;
            for &id in state.party.members() {
                if id == subject {
                    roster.extend_from_slice(targets);
                    replaced = true;
                } else {
                    roster.push(id);
                }
            }
            // Subject not in the party: nothing to replace, append.
            if !replaced {
                roster.extend_from_slice(targets);
            }
        }
        SummonStyle::Augment => {
            roster.extend_from_slice(state.party.members());
            roster.extend_from_slice(targets);
        }
    }
    roster
}
