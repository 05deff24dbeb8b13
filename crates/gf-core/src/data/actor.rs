//! Actor definition records

use serde::{Deserialize, Serialize};

use super::{ActorId, ClassId};

/// Static definition of a controllable character.
///
/// `is_guardian_force` is fixed at authoring time; it decides which side
/// of the roster partition the actor lives on and never changes at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: ActorId,
    pub name: String,
    pub class_id: ClassId,
    pub initial_level: i32,
    pub max_hp: i32,
    pub is_guardian_force: bool,
}
