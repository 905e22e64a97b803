pub mod aggregate;
pub mod list_fields;
pub mod xml;
