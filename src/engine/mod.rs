pub mod constants;
pub mod filter;
pub mod profiles;
pub mod ranking;
pub mod scoring;

pub use constants::*;
pub use filter::filter_by_category;
pub use profiles::{profile_for, GoalProfile, MacroWeights, GOAL_PROFILES};
pub use ranking::{
    rank_items, rank_suggestions, rank_suggestions_for, rank_suggestions_with, ScoredItem,
};
pub use scoring::{score_item, score_macros, ProfileWeights};
