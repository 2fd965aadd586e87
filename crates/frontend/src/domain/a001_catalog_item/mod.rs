pub mod analyzer;
pub mod engine;
pub mod loader;
pub mod preference;
pub mod query;
pub mod ui;

pub use engine::ProductsFilter;
