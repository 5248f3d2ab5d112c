//! Resolution of attacks, saving throws and generic checks.
//!
//! Success runs in two directions depending on the check:
//! - **Roll high** (attacks, saving throws): total at or above the target
//! - **Roll under** (ability checks, luck): total at or below the threshold
//!
//! Morale and initiative report the roll only; what it means is up to the
//! caller.

pub mod attack;
pub mod check;
pub mod save;

pub use attack::{AttackOutcome, resolve_attack};
pub use check::{resolve_ability_check, resolve_initiative, resolve_luck_check, resolve_morale};
pub use save::{SaveOutcome, resolve_save, resolve_save_against};

use serde::{Deserialize, Serialize};

/// Which side of the threshold counts as a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Success when the total is greater than or equal to the threshold.
    AtLeast,
    /// Success when the total is less than or equal to the threshold.
    AtMost,
}

impl Comparison {
    /// Whether `total` succeeds against `threshold`. Both bounds are inclusive.
    pub fn succeeds(self, total: i32, threshold: i32) -> bool {
        match self {
            Self::AtLeast => total >= threshold,
            Self::AtMost => total <= threshold,
        }
    }
}

/// The outcome of a roll compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// The natural die result.
    pub roll: u32,
    /// Modifier added to the die.
    pub modifier: i32,
    /// Die plus modifier.
    pub total: i32,
    /// The number compared against.
    pub threshold: i32,
    /// Which direction succeeds.
    pub comparison: Comparison,
    /// Whether the check succeeded.
    pub success: bool,
}

impl std::fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self.comparison {
            Comparison::AtLeast => ">=",
            Comparison::AtMost => "<=",
        };
        let verdict = if self.success { "Success" } else { "Failure" };
        write!(
            f,
            "{} (rolled {}, total {} {} {})",
            verdict, self.roll, self.total, op, self.threshold
        )
    }
}
