use super::field::ListRecord;
use super::filter::filter_records;
use super::state::SubsetCriteria;

/// Fixed-subset stage.
///
/// Filters the batch, orders it ascending by the sort key (case-insensitive
/// and locale-aware, stable so ties keep source order) and keeps the first
/// `page_size` rows.
/// The sort direction is not an input.
pub fn compute_fixed_subset<R: ListRecord>(batch: &[R], criteria: &SubsetCriteria) -> Vec<R> {
    let mut rows = filter_records(batch, &criteria.term, criteria.scope);

    if let Some(field) = R::field(criteria.sort_key) {
        rows.sort_by(|a, b| field.compare(a, b));
    }

    if let Some(limit) = criteria.page_size.limit() {
        rows.truncate(limit);
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_customer::aggregate::{Customer, CustomerCategory};
    use crate::shared::list_view::state::{PageSize, SearchScope};

    fn customer(id: i32, name: &str, category: Option<(&str, &str)>) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            address: String::new(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: String::new(),
            iban: String::new(),
            customer_category: category.map(|(code, description)| CustomerCategory {
                code: code.to_string(),
                description: description.to_string(),
            }),
        }
    }

    fn criteria(sort_key: &'static str, page_size: PageSize) -> SubsetCriteria {
        SubsetCriteria {
            term: String::new(),
            scope: SearchScope::AnyField,
            sort_key,
            page_size,
        }
    }

    fn ids(rows: &[Customer]) -> Vec<i32> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_baseline_sort_is_case_insensitive_and_stable() {
        let batch = vec![
            customer(1, "beta", None),
            customer(2, "Alfa", None),
            customer(3, "BETA", None),
            customer(4, "alfa", None),
        ];
        let rows = compute_fixed_subset(&batch, &criteria("name", PageSize::All));
        assert_eq!(ids(&rows), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_accented_initials_sort_with_their_base_letter() {
        let batch = vec![
            customer(1, "Zeta Srl", None),
            customer(2, "Élan Srl", None),
            customer(3, "Alfa", None),
            customer(4, "elettra", None),
        ];
        let rows = compute_fixed_subset(&batch, &criteria("name", PageSize::All));
        assert_eq!(ids(&rows), vec![3, 2, 4, 1]);

        // the cut keeps the accented name inside the first page
        let batch: Vec<Customer> = (0..10)
            .map(|i| customer(i, &format!("Zeta {i}"), None))
            .chain([customer(99, "Èrica", None)])
            .collect();
        let rows = compute_fixed_subset(&batch, &criteria("name", PageSize::Rows(10)));
        assert_eq!(rows[0].id, 99);
        assert_eq!(rows.len(), 10);
    }

    #[test]
    fn test_page_size_truncates_after_sort() {
        let batch: Vec<Customer> = (0..25)
            .rev()
            .map(|i| customer(i, &format!("Customer {i:02}"), None))
            .collect();
        let rows = compute_fixed_subset(&batch, &criteria("name", PageSize::Rows(10)));
        assert_eq!(ids(&rows), (0..10).collect::<Vec<_>>());

        let all = compute_fixed_subset(&batch, &criteria("name", PageSize::All));
        assert_eq!(all.len(), 25);

        let twenty = compute_fixed_subset(&batch, &criteria("name", PageSize::Rows(20)));
        assert_eq!(twenty.len(), 20);
    }

    #[test]
    fn test_category_sort_uses_code_and_description() {
        let batch = vec![
            customer(1, "a", Some(("ZZ", "Last"))),
            customer(2, "b", None),
            customer(3, "c", Some(("AA", "first"))),
            customer(4, "d", Some(("aa", "First"))),
        ];
        let rows = compute_fixed_subset(&batch, &criteria("customerCategory", PageSize::All));
        // missing category sorts as "" and therefore first
        assert_eq!(ids(&rows), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_filter_applies_before_truncation() {
        let batch = vec![
            customer(1, "Rossi", None),
            customer(2, "Bianchi", None),
            customer(3, "Rossetti", None),
        ];
        let mut c = criteria("name", PageSize::Rows(10));
        c.term = "ross".to_string();
        let rows = compute_fixed_subset(&batch, &c);
        assert_eq!(ids(&rows), vec![3, 1]);
    }
}
