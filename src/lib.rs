pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod session;

pub use engine::{rank_suggestions, rank_suggestions_for, rank_suggestions_with, ProfileWeights};
pub use error::{MacraveError, Result};
pub use models::{FitnessGoal, MenuItem, SuggestionResult};
