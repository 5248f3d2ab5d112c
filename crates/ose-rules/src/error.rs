//! Error types for the rules engine.

/// Errors raised when a caller hands the engine invalid input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A dice roll was requested with fewer than one die or fewer than two faces.
    #[error("invalid dice spec: {count}d{faces} (need at least 1 die of 2 or more faces)")]
    InvalidDiceSpec {
        /// Number of dice requested.
        count: u32,
        /// Faces per die requested.
        faces: u32,
    },

    /// A dice roll would use too many dice, or its totals would not fit in an `i32`.
    #[error("dice spec out of range: {count}d{faces}{modifier:+}")]
    DiceOutOfRange {
        /// Number of dice requested.
        count: u32,
        /// Faces per die requested.
        faces: u32,
        /// Modifier requested.
        modifier: i32,
    },

    /// A dice notation string could not be parsed.
    #[error("invalid dice notation: {0}")]
    InvalidDiceNotation(String),

    /// A class or race token is not one of the playable classes.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// A saving throw category is not one of the five save types.
    #[error("unknown save type: {0}")]
    UnknownSaveType(String),

    /// A level below 1 was passed to a level-keyed lookup.
    #[error("invalid level: {0} (levels start at 1)")]
    InvalidLevel(u32),

    /// An ability score generation method was not recognized.
    #[error("invalid generation method: {0}")]
    InvalidGenerationMethod(String),
}

/// Convenience result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
