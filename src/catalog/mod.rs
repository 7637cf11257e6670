mod highlights;
mod persistence;
mod store;

pub use highlights::{highlights, Highlight};
pub use persistence::load_catalog;
pub use store::{InMemoryCatalog, MenuCatalog};
