pub mod a001_customer;
pub mod a002_employee;
pub mod a003_supplier;

use serde::Deserialize;

/// Query string of the `/list` endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "searchText")]
    pub search_text: Option<String>,
}
