pub mod list_toolbar;
pub mod sortable_header_cell;

pub use list_toolbar::ListToolbar;
pub use sortable_header_cell::SortableHeaderCell;
