use super::repository;
use crate::shared::query::normalize_search;
use contracts::domain::a001_customer::aggregate::Customer;

pub async fn list(search: Option<String>) -> anyhow::Result<Vec<Customer>> {
    let search = normalize_search(search);
    let items = repository::list(search.as_deref()).await?;
    tracing::debug!("customers: {} rows (search: {:?})", items.len(), search);
    Ok(items)
}
