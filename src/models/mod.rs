mod goal;
mod menu_item;
mod suggestion;
mod user;

pub use goal::FitnessGoal;
pub use menu_item::{Macros, MenuItem};
pub use suggestion::{MenuResponse, SuggestionResult};
pub use user::{hash_password, NewUser, UserProfile};
