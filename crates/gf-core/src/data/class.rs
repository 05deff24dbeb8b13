//! Class definition records and the experience curve

use serde::{Deserialize, Serialize};

use super::{ClassId, SkillId};
use crate::consts::MAX_LEVEL;

/// One skill-learning entry on a class.
///
/// Entries with an AP requirement feed a Guardian Force's learning queue
/// once the level gate is met; the skill itself is still learned at the
/// gate level like any other, it just stays unusable until the AP is
/// paid off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Learning {
    pub level: i32,
    pub skill_id: SkillId,
    pub ap_required: Option<u32>,
}

/// Static definition of an actor class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassData {
    pub id: ClassId,
    pub name: String,
    /// Quadratic coefficient of the experience curve.
    pub exp_basis: u64,
    /// Linear coefficient of the experience curve.
    pub exp_extra: u64,
    /// Learning entries in authoring order; this order is what the
    /// learning queue advances through.
    pub learnings: Vec<Learning>,
}

impl ClassData {
    /// Total experience required to reach `level` from scratch.
    ///
    /// Monotonic in `level`, zero at level 1, capped at `MAX_LEVEL`.
    pub fn exp_for_level(&self, level: i32) -> u64 {
        let l = level.clamp(1, MAX_LEVEL) as u64 - 1;
        self.exp_basis * l * l + self.exp_extra * l
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class() -> ClassData {
        ClassData {
            id: ClassId(1),
            name: "SeeD".to_string(),
            exp_basis: 30,
            exp_extra: 20,
            learnings: Vec::new(),
        }
    }

    #[test]
    fn test_curve_starts_at_zero() {
        assert_eq!(class().exp_for_level(1), 0);
        assert_eq!(class().exp_for_level(0), 0);
    }

    #[test]
    fn test_curve_monotonic() {
        let c = class();
        let mut prev = 0;
        for level in 2..=MAX_LEVEL {
            let need = c.exp_for_level(level);
            assert!(need > prev);
            prev = need;
        }
    }

    #[test]
    fn test_curve_caps_at_max_level() {
        let c = class();
        assert_eq!(c.exp_for_level(MAX_LEVEL), c.exp_for_level(MAX_LEVEL + 5));
    }
}
