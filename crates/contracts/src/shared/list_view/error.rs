use thiserror::Error;

/// Ошибки разбора значений элементов управления списка (select, заголовки колонок)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViewError {
    #[error("unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    #[error("invalid page size '{0}', expected one of 10, 20, 50, 100, all")]
    InvalidPageSize(String),
}
