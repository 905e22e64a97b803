//! Types and pure logic shared by the backend and the frontend.
//!
//! - [`domain`]: flat records returned by the list endpoints
//! - [`shared::list_view`]: filter / fixed subset / reorder pipeline
//! - [`shared::xml_export`]: XML document rendering for downloads

pub mod domain;
pub mod shared;
