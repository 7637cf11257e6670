pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_suggestions_csv;
pub use prompts::{prompt_goal, prompt_login, prompt_registration, prompt_restaurant_choice};
pub use render::{
    display_categories, display_goals, display_highlights, display_item_card, display_menu,
    display_restaurants, display_suggestions, display_user,
};
