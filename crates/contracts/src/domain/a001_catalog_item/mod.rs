pub mod aggregate;
pub mod error;
pub mod filter;

pub use aggregate::{Item, ItemId, RawItem};
pub use error::CatalogError;
pub use filter::{
    clamp_page_size, FilterState, PriceRange, SortOption, PAGE_SIZE_DEFAULT, PAGE_SIZE_MAX,
    PAGE_SIZE_MIN, PAGE_SIZE_OPTIONS, PAGE_WINDOW_MAX, SEARCH_DEBOUNCE_MS,
};
