pub mod pagination;
pub mod search_box;
pub mod sortable_header;

pub use pagination::Pagination;
pub use search_box::SearchBox;
pub use sortable_header::SortableHeader;
