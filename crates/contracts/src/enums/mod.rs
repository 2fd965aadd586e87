pub mod sort_direction;
pub mod sort_field;

pub use sort_direction::SortDirection;
pub use sort_field::SortField;
