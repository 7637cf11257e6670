pub mod auth;
mod file_store;
mod repository;

pub use auth::{login, logout, register, require_current, update_goal};
pub use file_store::JsonFileSessionStore;
pub use repository::{InMemorySessionStore, SessionRepository};
