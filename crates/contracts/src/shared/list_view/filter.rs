use super::field::{ListRecord, MatchMode};
use super::state::SearchScope;

/// Normalized search term, `None` when the term means "no filter".
pub fn normalize_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Checks a single record against an already normalized term.
pub fn record_matches<R: ListRecord>(record: &R, term_lower: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Field(key) => match R::field(key) {
            Some(field) => field.matches(record, term_lower),
            None => any_field_matches(record, term_lower),
        },
        SearchScope::AnyField => any_field_matches(record, term_lower),
    }
}

// "Any field" search is always plain containment, even for whole-word fields.
fn any_field_matches<R: ListRecord>(record: &R, term_lower: &str) -> bool {
    R::fields()
        .iter()
        .chain(R::search_only_fields())
        .filter(|f| f.any_field)
        .any(|f| MatchMode::Contains.matches(&(f.value)(record), term_lower))
}

/// Filter stage: keeps the records matching `term` in their original order.
pub fn filter_records<R: ListRecord>(batch: &[R], term: &str, scope: SearchScope) -> Vec<R> {
    let Some(term_lower) = normalize_term(term) else {
        return batch.to_vec();
    };

    batch
        .iter()
        .filter(|record| record_matches(*record, &term_lower, scope))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_employee::aggregate::Employee;
    use crate::domain::a003_supplier::aggregate::Supplier;

    fn supplier(id: i32, name: &str, email: &str, address: &str) -> Supplier {
        Supplier {
            id,
            name: name.to_string(),
            address: address.to_string(),
            email: email.to_string(),
            phone: String::new(),
        }
    }

    fn person(id: i32, first_name: &str, last_name: &str) -> Employee {
        Employee {
            last_name: last_name.to_string(),
            ..employee(id, first_name, "")
        }
    }

    fn employee(id: i32, first_name: &str, address: &str) -> Employee {
        Employee {
            id,
            first_name: first_name.to_string(),
            last_name: String::new(),
            address: address.to_string(),
            email: String::new(),
            phone: String::new(),
        }
    }

    #[test]
    fn test_blank_term_keeps_batch() {
        let batch = vec![
            supplier(2, "Beta", "b@x.it", ""),
            supplier(1, "Alfa", "a@x.it", ""),
        ];
        assert_eq!(filter_records(&batch, "", SearchScope::AnyField), batch);
        assert_eq!(filter_records(&batch, "   ", SearchScope::AnyField), batch);
        assert_eq!(normalize_term(" \t"), None);
        assert_eq!(normalize_term(" MiXed "), Some("mixed".to_string()));
    }

    #[test]
    fn test_any_field_uses_name_and_email_only() {
        let batch = vec![
            supplier(1, "Ferramenta Rossi", "info@rossi.it", "Via Verdi"),
            supplier(2, "Bianchi", "ordini@ROSSI-group.com", ""),
            supplier(3, "Neri", "neri@mail.it", "Piazza Rossi"),
        ];
        let ids: Vec<i32> = filter_records(&batch, "rossi", SearchScope::AnyField)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_field_scope_address_is_whole_word() {
        let batch = vec![employee(1, "Ann", "12 Elm St"), employee(2, "Bob", "5 Elm Court")];

        let both = filter_records(&batch, "elm", SearchScope::Field("address"));
        assert_eq!(both.len(), 2);

        let st = filter_records(&batch, "st", SearchScope::Field("address"));
        assert_eq!(st.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);

        // "any field" mode keeps substring semantics on the address
        let court = filter_records(&batch, "cour", SearchScope::AnyField);
        assert_eq!(court.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_field_scope_first_name_is_substring() {
        let batch = vec![employee(1, "Annalisa", ""), employee(2, "Giovanni", "")];
        let found = filter_records(&batch, "ANN", SearchScope::Field("firstName"));
        assert_eq!(found.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_any_field_matches_employee_full_name() {
        let batch = vec![
            person(1, "Ann", "Lee"),
            person(2, "Anna", "Leeds"),
            person(3, "Lee", "Ann"),
        ];
        let ids = |term: &str| -> Vec<i32> {
            filter_records(&batch, term, SearchScope::AnyField)
                .iter()
                .map(|e| e.id)
                .collect()
        };
        assert_eq!(ids("ann lee"), vec![1]);
        assert_eq!(ids("  ANN LEE "), vec![1]);
        assert_eq!(ids("anna lee"), vec![2]);

        // the combined name is not a column
        assert!(Employee::field("fullName").is_none());
        assert!(filter_records(&batch, "ann lee", SearchScope::Field("firstName")).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let batch = vec![employee(1, "Ann", "12 Elm St")];
        assert!(filter_records(&batch, "zzz", SearchScope::AnyField).is_empty());
        assert!(filter_records::<Employee>(&[], "ann", SearchScope::AnyField).is_empty());
    }
}
