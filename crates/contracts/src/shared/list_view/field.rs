use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use super::collation::compare_text;
use super::error::ListViewError;

/// How a search term is compared against a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring containment.
    Contains,
    /// The term must equal one whole token of the value
    /// (tokens are split on non-word characters).
    WholeWord,
}

impl MatchMode {
    /// `term_lower` must already be trimmed and lower-cased.
    pub fn matches(self, value: &str, term_lower: &str) -> bool {
        let value_lower = value.to_lowercase();
        match self {
            MatchMode::Contains => value_lower.contains(term_lower),
            MatchMode::WholeWord => value_lower
                .split(|c: char| !is_word_char(c))
                .any(|token| !token.is_empty() && token == term_lower),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// One row of an entity's field table: how to read a column,
/// how to search it and how to label it.
pub struct FieldSpec<R> {
    /// Identifier used by sort headers, the scope selector and the JSON shape.
    pub key: &'static str,
    pub label: &'static str,
    /// Display value; absent optional data reads as `""`.
    pub value: for<'a> fn(&'a R) -> Cow<'a, str>,
    pub match_mode: MatchMode,
    /// Whether the field takes part in "any field" search.
    pub any_field: bool,
}

impl<R> FieldSpec<R> {
    /// Baseline ascending comparison of two records on this field.
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        compare_text(&(self.value)(a), &(self.value)(b))
    }

    pub fn matches(&self, record: &R, term_lower: &str) -> bool {
        self.match_mode.matches(&(self.value)(record), term_lower)
    }
}

impl<R> fmt::Debug for FieldSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("match_mode", &self.match_mode)
            .field("any_field", &self.any_field)
            .finish()
    }
}

/// A flat record that can be shown in a list page.
///
/// Every entity describes its columns once, in display order, and the
/// pipeline dispatches through that table instead of matching on field names.
pub trait ListRecord: Clone + 'static {
    /// Singular entity name, used in messages.
    const ENTITY: &'static str;

    /// Field used for ordering when a page is opened.
    const DEFAULT_SORT_KEY: &'static str;

    fn id(&self) -> i32;

    fn fields() -> &'static [FieldSpec<Self>];

    /// Extra values searched in "any field" mode that are not columns,
    /// so they are never offered as sort keys or search scopes.
    fn search_only_fields() -> &'static [FieldSpec<Self>] {
        &[]
    }

    fn field(key: &str) -> Option<&'static FieldSpec<Self>> {
        Self::fields().iter().find(|f| f.key == key)
    }

    /// Resolves a key coming from the UI into the static key of the table.
    fn parse_field_key(key: &str) -> Result<&'static str, ListViewError> {
        Self::field(key)
            .map(|f| f.key)
            .ok_or_else(|| ListViewError::UnknownField {
                entity: Self::ENTITY,
                field: key.to_string(),
            })
    }
}
