pub mod filter;
pub mod hook;
pub mod list;
pub mod page;

pub use page::CatalogPage;
