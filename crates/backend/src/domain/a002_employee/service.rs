use super::repository;
use crate::shared::query::normalize_search;
use contracts::domain::a002_employee::aggregate::Employee;

pub async fn list(search: Option<String>) -> anyhow::Result<Vec<Employee>> {
    let search = normalize_search(search);
    let items = repository::list(search.as_deref()).await?;
    tracing::debug!("employees: {} rows (search: {:?})", items.len(), search);
    Ok(items)
}
