use serde::{Deserialize, Serialize};

use crate::engine::constants::*;
use crate::models::{FitnessGoal, Macros};

/// Linear weights over the scored macros.
///
/// A weight of zero means the macro does not affect the score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroWeights {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroWeights {
    /// Weighted sum of the macros.
    #[inline]
    pub fn apply(&self, macros: &Macros) -> f64 {
        macros.calories * self.calories
            + macros.protein_grams * self.protein
            + macros.carbs_grams * self.carbs
            + macros.fat_grams * self.fat
    }
}

/// Scoring weights plus display metadata for one fitness goal.
#[derive(Debug)]
pub struct GoalProfile {
    pub goal: FitnessGoal,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub weights: MacroWeights,
}

/// One entry per goal, in `FitnessGoal::ALL` order.
pub static GOAL_PROFILES: [GoalProfile; 3] = [
    GoalProfile {
        goal: FitnessGoal::Cutting,
        label: "Cutting",
        icon: "✂️",
        description: "Lean out: as much protein as possible for the fewest calories.",
        weights: MacroWeights {
            calories: CUTTING_CALORIE_WEIGHT,
            protein: CUTTING_PROTEIN_WEIGHT,
            carbs: 0.0,
            fat: 0.0,
        },
    },
    GoalProfile {
        goal: FitnessGoal::Bulking,
        label: "Bulking",
        icon: "💪",
        description: "Build mass: plenty of protein and plenty of calories.",
        weights: MacroWeights {
            calories: BULKING_CALORIE_WEIGHT,
            protein: BULKING_PROTEIN_WEIGHT,
            carbs: 0.0,
            fat: 0.0,
        },
    },
    GoalProfile {
        goal: FitnessGoal::Keto,
        label: "Keto",
        icon: "🥦",
        description: "Stay in ketosis: high fat, carbs kept to a minimum.",
        weights: MacroWeights {
            calories: 0.0,
            protein: 0.0,
            carbs: KETO_CARB_WEIGHT,
            fat: KETO_FAT_WEIGHT,
        },
    },
];

pub fn profile_for(goal: FitnessGoal) -> &'static GoalProfile {
    match goal {
        FitnessGoal::Cutting => &GOAL_PROFILES[0],
        FitnessGoal::Bulking => &GOAL_PROFILES[1],
        FitnessGoal::Keto => &GOAL_PROFILES[2],
    }
}
