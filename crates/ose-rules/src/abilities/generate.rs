//! Ability score generation and primary-characteristic reallocation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Ability, AbilityScores, MAX_SCORE};
use crate::classes::ClassDefinition;
use crate::dice::{RandomSource, roll};
use crate::error::{RulesError, RulesResult};

/// Scores above this may be lowered to raise the primary characteristic.
const EXCHANGE_FLOOR: i32 = 9;

/// Characteristics that may be traded down, in the order they are considered.
const EXCHANGEABLE: [Ability; 3] = [Ability::Strength, Ability::Intelligence, Ability::Wisdom];

/// How the six scores are rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// 3d6 for each score.
    #[default]
    Classic,
    /// 4d6 for each score, dropping the lowest die.
    Heroic,
    /// 3d6 for each score, rerolling any total below 6.
    RerollLow,
}

impl GenerationMethod {
    /// All methods.
    pub const ALL: [GenerationMethod; 3] = [Self::Classic, Self::Heroic, Self::RerollLow];

    /// Short dice tag for the method.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Classic => "3d6",
            Self::Heroic => "4d6-drop-lowest",
            Self::RerollLow => "3d6-reroll-below-6",
        }
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Classic => "classic",
            Self::Heroic => "heroic",
            Self::RerollLow => "reroll-low",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GenerationMethod {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        match key.as_str() {
            "classic" | "3d6" => Ok(Self::Classic),
            "heroic" | "4d6" | "4d6-drop-lowest" => Ok(Self::Heroic),
            "reroll-low" | "rerolllow" | "3d6-reroll-below-6" => Ok(Self::RerollLow),
            _ => Err(RulesError::InvalidGenerationMethod(s.trim().to_string())),
        }
    }
}

/// Roll six scores with the given method, in [`Ability::ALL`] order.
pub fn generate(
    method: GenerationMethod,
    rng: &mut dyn RandomSource,
) -> RulesResult<AbilityScores> {
    let mut scores = [0; 6];
    for score in &mut scores {
        *score = roll_score(method, rng)?;
    }
    let scores = AbilityScores::from_array(scores);
    debug!(%method, ?scores, "generated ability scores");
    Ok(scores)
}

fn roll_score(method: GenerationMethod, rng: &mut dyn RandomSource) -> RulesResult<i32> {
    match method {
        GenerationMethod::Classic => Ok(roll(3, 6, 0, rng)?.total),
        GenerationMethod::Heroic => {
            let result = roll(4, 6, 0, rng)?;
            Ok((result.dice_total() - result.lowest()) as i32)
        }
        GenerationMethod::RerollLow => loop {
            let total = roll(3, 6, 0, rng)?.total;
            if total >= 6 {
                break Ok(total);
            }
            trace!(total, "rerolling low score");
        },
    }
}

/// Trade points from Strength, Intelligence and Wisdom into the class's
/// primary characteristic.
///
/// Each exchangeable score other than the primary is considered in turn.
/// While it is above 9 and the primary is below 18, it loses 2 and the
/// primary gains 1.
pub fn reallocate(mut scores: AbilityScores, class: &ClassDefinition) -> AbilityScores {
    let primary = class.primary;

    for stat in EXCHANGEABLE.into_iter().filter(|&a| a != primary) {
        while scores.get(stat) > EXCHANGE_FLOOR && scores.get(primary) < MAX_SCORE {
            *scores.get_mut(stat) -= 2;
            *scores.get_mut(primary) += 1;
            trace!(
                from = %stat,
                to = %primary,
                remaining = scores.get(stat),
                primary_score = scores.get(primary),
                "reallocated points"
            );
        }
    }

    scores
}
