//! List-view pipeline: filter → fixed subset → reorder.
//!
//! ```
//! use contracts::domain::a003_supplier::aggregate::Supplier;
//! use contracts::shared::list_view::{compute_fixed_subset, reorder, ListViewState};
//!
//! let batch: Vec<Supplier> = Vec::new();
//! let state = ListViewState::initial::<Supplier>().toggle_sort("name");
//! let subset = compute_fixed_subset(&batch, &state.criteria);
//! let rows = reorder(&subset, state.direction);
//! assert!(rows.is_empty());
//! ```

pub mod collation;
pub mod error;
pub mod field;
pub mod filter;
pub mod fixed_subset;
pub mod reorder;
pub mod state;

pub use collation::compare_text;
pub use error::ListViewError;
pub use field::{FieldSpec, ListRecord, MatchMode};
pub use filter::{filter_records, normalize_term, record_matches};
pub use fixed_subset::compute_fixed_subset;
pub use reorder::reorder;
pub use state::{ListViewState, PageSize, SearchScope, SortDirection, SubsetCriteria};
