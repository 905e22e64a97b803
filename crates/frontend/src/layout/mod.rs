pub mod global_context;
pub mod header;
pub mod home;
