use std::borrow::Cow;

use super::aggregate::Employee;
use crate::shared::list_view::{FieldSpec, ListRecord, MatchMode};

// The address column matches whole words only when it is the selected
// search field; every other column uses substring containment.
static FIELDS: [FieldSpec<Employee>; 5] = [
    FieldSpec {
        key: "firstName",
        label: "First name",
        value: |e| Cow::Borrowed(&e.first_name),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "lastName",
        label: "Last name",
        value: |e| Cow::Borrowed(&e.last_name),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "address",
        label: "Address",
        value: |e| Cow::Borrowed(&e.address),
        match_mode: MatchMode::WholeWord,
        any_field: true,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        value: |e| Cow::Borrowed(&e.email),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "phone",
        label: "Phone",
        value: |e| Cow::Borrowed(&e.phone),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
];

// "Ann Lee" finds Ann Lee in "any field" mode.
static SEARCH_ONLY_FIELDS: [FieldSpec<Employee>; 1] = [FieldSpec {
    key: "fullName",
    label: "Full name",
    value: |e| Cow::Owned(e.full_name()),
    match_mode: MatchMode::Contains,
    any_field: true,
}];

impl ListRecord for Employee {
    const ENTITY: &'static str = "employee";
    const DEFAULT_SORT_KEY: &'static str = "firstName";

    fn id(&self) -> i32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }

    fn search_only_fields() -> &'static [FieldSpec<Self>] {
        &SEARCH_ONLY_FIELDS
    }
}
