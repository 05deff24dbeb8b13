//! Actor system
//!
//! Runtime actors, the actor registry, and the AP learning queue.

mod actor;
mod actors;
mod learning;

pub use actor::{Actor, ScanTrigger};
pub use actors::Actors;
pub use learning::{LearningEntry, LearningQueue};
