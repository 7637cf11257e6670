use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::profiles::{profile_for, GoalProfile};
use crate::error::MacraveError;

/// The fitness goal a user ranks menu items for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessGoal {
    Cutting,
    Bulking,
    Keto,
}

impl FitnessGoal {
    pub const ALL: [FitnessGoal; 3] = [Self::Cutting, Self::Bulking, Self::Keto];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cutting => "cutting",
            Self::Bulking => "bulking",
            Self::Keto => "keto",
        }
    }

    /// Static profile (weights and display metadata) for this goal.
    pub fn profile(self) -> &'static GoalProfile {
        profile_for(self)
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = MacraveError;

    /// Accepts the goal name in any letter case; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MacraveError::InvalidGoal(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_goals() {
        assert_eq!("cutting".parse::<FitnessGoal>().unwrap(), FitnessGoal::Cutting);
        assert_eq!("Bulking".parse::<FitnessGoal>().unwrap(), FitnessGoal::Bulking);
        assert_eq!(" KETO ".parse::<FitnessGoal>().unwrap(), FitnessGoal::Keto);
    }

    #[test]
    fn test_parse_unknown_goal() {
        let err = "shredding".parse::<FitnessGoal>().unwrap_err();
        assert!(matches!(err, MacraveError::InvalidGoal(ref g) if g == "shredding"));
        assert!("".parse::<FitnessGoal>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&FitnessGoal::Keto).unwrap(), "\"keto\"");
        let goal: FitnessGoal = serde_json::from_str("\"bulking\"").unwrap();
        assert_eq!(goal, FitnessGoal::Bulking);
    }

    #[test]
    fn test_display_round_trip() {
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.to_string().parse::<FitnessGoal>().unwrap(), goal);
        }
    }
}
