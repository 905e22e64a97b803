pub mod list_view;
pub mod xml_export;
