//! Event-scripting command surface
//!
//! Map events credit or debit a named actor's AP directly. Commands
//! arrive as text lines from the host interpreter; lines for other
//! subsystems pass through untouched, while a recognized command with
//! malformed arguments is an error.

use thiserror::Error;

use crate::data::ActorId;
use crate::game::GameState;

/// A parsed scripting command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginCommand {
    /// Credit an actor's AP.
    GainAp { actor_id: ActorId, amount: i32 },
    /// Debit an actor's AP.
    LoseAp { actor_id: ActorId, amount: i32 },
}

/// Scripting command parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command '{0}' expects an actor id and an amount")]
    BadArguments(String),
}

/// Parse one interpreter line. Returns `None` for commands belonging to
/// other subsystems.
pub fn parse_command(line: &str) -> Result<Option<PluginCommand>, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(None);
    };
    if !matches!(command, "GainAP" | "LoseAP") {
        return Ok(None);
    }
    let args: Vec<&str> = parts.collect();
    let parsed = (|| {
        let [id, amount] = args.as_slice() else {
            return None;
        };
        let actor_id = ActorId(id.parse().ok()?);
        let amount: i32 = amount.parse().ok()?;
        Some((actor_id, amount))
    })();
    let Some((actor_id, amount)) = parsed else {
        return Err(CommandError::BadArguments(command.to_string()));
    };
    let cmd = match command {
        "GainAP" => PluginCommand::GainAp { actor_id, amount },
        _ => PluginCommand::LoseAp { actor_id, amount },
    };
    Ok(Some(cmd))
}

/// Execute a parsed command. Scripted AP changes are silent; the event
/// author announces what they want themselves.
pub fn exec_command(state: &mut GameState, command: PluginCommand) {
    match command {
        PluginCommand::GainAp { actor_id, amount } => state.gain_ap(actor_id, amount, false),
        PluginCommand::LoseAp { actor_id, amount } => state.gain_ap(actor_id, -amount, false),
    }
}

/// Resolve an event's actor-id parameter the way the interpreter does:
/// zero means every owned actor, members and Guardian Forces alike.
pub fn iterate_actor_ids(state: &GameState, param: u16) -> Vec<ActorId> {
    if param == 0 {
        state.party.all_members()
    } else {
        let id = ActorId(param);
        if state.actors.contains(id) {
            vec![id]
        } else {
            Vec::new()
        }
    }
}
