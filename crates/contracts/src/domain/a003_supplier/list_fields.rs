use std::borrow::Cow;

use super::aggregate::Supplier;
use crate::shared::list_view::{FieldSpec, ListRecord, MatchMode};

static FIELDS: [FieldSpec<Supplier>; 4] = [
    FieldSpec {
        key: "name",
        label: "Name",
        value: |s| Cow::Borrowed(&s.name),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "address",
        label: "Address",
        value: |s| Cow::Borrowed(&s.address),
        match_mode: MatchMode::Contains,
        any_field: false,
    },
    FieldSpec {
        key: "email",
        label: "Email",
        value: |s| Cow::Borrowed(&s.email),
        match_mode: MatchMode::Contains,
        any_field: true,
    },
    FieldSpec {
        key: "phone",
        label: "Phone",
        value: |s| Cow::Borrowed(&s.phone),
        match_mode: MatchMode::Contains,
        any_field: false,
    },
];

impl ListRecord for Supplier {
    const ENTITY: &'static str = "supplier";
    const DEFAULT_SORT_KEY: &'static str = "name";

    fn id(&self) -> i32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec<Self>] {
        &FIELDS
    }
}
