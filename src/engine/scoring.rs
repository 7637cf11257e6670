use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::profiles::{profile_for, MacroWeights};
use crate::error::{MacraveError, Result};
use crate::models::{FitnessGoal, Macros, MenuItem};

/// Scoring weights for every goal.
///
/// Defaults to the weights in the goal profile table. A goal present in a
/// weights file replaces all four of that goal's weights (missing ones are 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileWeights {
    pub cutting: MacroWeights,
    pub bulking: MacroWeights,
    pub keto: MacroWeights,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            cutting: profile_for(FitnessGoal::Cutting).weights,
            bulking: profile_for(FitnessGoal::Bulking).weights,
            keto: profile_for(FitnessGoal::Keto).weights,
        }
    }
}

impl ProfileWeights {
    pub fn for_goal(&self, goal: FitnessGoal) -> &MacroWeights {
        match goal {
            FitnessGoal::Cutting => &self.cutting,
            FitnessGoal::Bulking => &self.bulking,
            FitnessGoal::Keto => &self.keto,
        }
    }

    /// Check that each goal still moves in its defining direction.
    ///
    /// cutting: protein up, calories down. bulking: protein and calories up.
    /// keto: fat up, carbs down.
    pub fn validate(&self) -> Result<()> {
        let all = [&self.cutting, &self.bulking, &self.keto];
        if all.iter().any(|w| {
            ![w.calories, w.protein, w.carbs, w.fat]
                .iter()
                .all(|x| x.is_finite())
        }) {
            return Err(MacraveError::InvalidInput(
                "scoring weights must be finite numbers".to_string(),
            ));
        }

        let checks = [
            (self.cutting.protein > 0.0, "cutting protein weight must be positive"),
            (self.cutting.calories < 0.0, "cutting calorie weight must be negative"),
            (self.bulking.protein > 0.0, "bulking protein weight must be positive"),
            (self.bulking.calories > 0.0, "bulking calorie weight must be positive"),
            (self.keto.fat > 0.0, "keto fat weight must be positive"),
            (self.keto.carbs < 0.0, "keto carb weight must be negative"),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(MacraveError::InvalidInput(msg.to_string())),
            None => Ok(()),
        }
    }
}

/// Score a complete set of macros under a goal.
#[inline]
pub fn score_macros(macros: &Macros, goal: FitnessGoal, weights: &ProfileWeights) -> f64 {
    weights.for_goal(goal).apply(macros)
}

/// Score a menu item, or `None` if it is missing a required macro.
pub fn score_item(item: &MenuItem, goal: FitnessGoal, weights: &ProfileWeights) -> Option<f64> {
    match item.macros() {
        Some(macros) => Some(score_macros(&macros, goal, weights)),
        None => {
            debug!(item = %item.debug_string(), "excluded from ranking: missing macros");
            None
        }
    }
}
