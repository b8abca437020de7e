pub mod catalog;
pub mod notes;
pub mod seed;

pub use notes::NoteService;
pub use seed::{CatalogSeeder, SeedStats};
