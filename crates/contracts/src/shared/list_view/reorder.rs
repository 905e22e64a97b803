use super::state::SortDirection;

/// Reorder stage: applies the direction to an already fixed subset.
///
/// Descending is the exact mirror of ascending, tied rows included.
pub fn reorder<R: Clone>(fixed_subset: &[R], direction: SortDirection) -> Vec<R> {
    match direction {
        SortDirection::Ascending => fixed_subset.to_vec(),
        SortDirection::Descending => fixed_subset.iter().rev().cloned().collect(),
    }
}
