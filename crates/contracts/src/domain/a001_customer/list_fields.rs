use std::borrow::Cow;

use super::aggregate::Customer;
use crate::shared::list_view::{FieldSpec, ListRecord, MatchMode};

static FIELDS: [FieldSpec<Customer>; 6] = [
    FieldSpec {
        key: "name",
        label: "Name",
        value: |c| Cow::Borrowed(&c.name),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "address",
        label: "Address",
        value: |c| Cow::Borrowed(&c.address),
        match_mode: MatchMode::Contains,
        any_field: false,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        value: |c| Cow::Borrowed(&c.email),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "phone",
        label: "Phone",
        value: |c| Cow::Borrowed(&c.phone),
        match_mode: MatchMode::Contains,
        any_field: false,
    },
    FieldSpec {
        key: "iban",
        label: "IBAN",
        value: |c| Cow::Borrowed(&c.iban),
        match_mode: MatchMode::Contains,
        any_field: false,
    },
    FieldSpec {
        key: "customerCategory",
        label: "Category",
        value: |c| Cow::Owned(c.category_display()),
        match_mode: MatchMode::Contains,
        any_field: false,
    },
];

impl ListRecord for Customer {
    const ENTITY: &'static str = "customer";
    const DEFAULT_SORT_KEY: &'static str = "name";

    fn id(&self) -> i32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }
}
