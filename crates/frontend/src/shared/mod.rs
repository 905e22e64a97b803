pub mod api_utils;
pub mod components;
pub mod export;
pub mod list_utils;
pub mod list_view;
pub mod page_frame;
