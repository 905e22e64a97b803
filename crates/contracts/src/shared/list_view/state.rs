use std::fmt;
use std::str::FromStr;

use super::error::ListViewError;
use super::field::ListRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Record-count cap of a list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(usize),
    All,
}

impl PageSize {
    /// Choices offered by the "Records" selector, in display order.
    pub const OPTIONS: [PageSize; 5] = [
        PageSize::Rows(10),
        PageSize::Rows(20),
        PageSize::Rows(50),
        PageSize::Rows(100),
        PageSize::All,
    ];

    pub fn limit(self) -> Option<usize> {
        match self {
            PageSize::Rows(n) => Some(n),
            PageSize::All => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "All".to_string(),
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Rows(10)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Rows(n) => write!(f, "{n}"),
            PageSize::All => f.write_str("all"),
        }
    }
}

impl FromStr for PageSize {
    type Err = ListViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        PageSize::OPTIONS
            .into_iter()
            .find(|option| option.to_string() == s)
            .ok_or_else(|| ListViewError::InvalidPageSize(s.to_string()))
    }
}

/// Which field(s) a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    AnyField,
    Field(&'static str),
}

impl SearchScope {
    /// Value used by `<select>` options.
    pub const ANY_FIELD_VALUE: &'static str = "any";

    pub fn parse<R: ListRecord>(value: &str) -> Result<Self, ListViewError> {
        if value == Self::ANY_FIELD_VALUE {
            return Ok(SearchScope::AnyField);
        }
        R::parse_field_key(value).map(SearchScope::Field)
    }

    pub fn value(self) -> &'static str {
        match self {
            SearchScope::AnyField => Self::ANY_FIELD_VALUE,
            SearchScope::Field(key) => key,
        }
    }
}

/// Everything that decides *which* records form the fixed subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetCriteria {
    /// Applied search term (not the text still being typed).
    pub term: String,
    pub scope: SearchScope,
    pub sort_key: &'static str,
    pub page_size: PageSize,
}

impl SubsetCriteria {
    pub fn initial<R: ListRecord>() -> Self {
        Self {
            term: String::new(),
            scope: SearchScope::AnyField,
            sort_key: R::DEFAULT_SORT_KEY,
            page_size: PageSize::default(),
        }
    }
}

/// Immutable view state of a list page.
///
/// Every user action produces a new value; criteria and direction are kept
/// apart so that flipping the direction can never touch the subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewState {
    pub criteria: SubsetCriteria,
    pub direction: SortDirection,
}

impl ListViewState {
    pub fn initial<R: ListRecord>() -> Self {
        Self {
            criteria: SubsetCriteria::initial::<R>(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self {
            criteria: SubsetCriteria {
                term: term.into(),
                ..self.criteria.clone()
            },
            direction: self.direction,
        }
    }

    pub fn with_scope(&self, scope: SearchScope) -> Self {
        Self {
            criteria: SubsetCriteria {
                scope,
                ..self.criteria.clone()
            },
            direction: self.direction,
        }
    }

    pub fn with_page_size(&self, page_size: PageSize) -> Self {
        Self {
            criteria: SubsetCriteria {
                page_size,
                ..self.criteria.clone()
            },
            direction: self.direction,
        }
    }

    /// Header click: the active column flips direction, another column
    /// becomes the sort key in ascending order.
    pub fn toggle_sort(&self, key: &'static str) -> Self {
        if self.criteria.sort_key == key {
            Self {
                criteria: self.criteria.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                criteria: SubsetCriteria {
                    sort_key: key,
                    ..self.criteria.clone()
                },
                direction: SortDirection::Ascending,
            }
        }
    }
}
