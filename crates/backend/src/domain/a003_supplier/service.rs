use super::repository;
use crate::shared::query::normalize_search;
use contracts::domain::a003_supplier::aggregate::Supplier;

pub async fn list(search: Option<String>) -> anyhow::Result<Vec<Supplier>> {
    let search = normalize_search(search);
    let items = repository::list(search.as_deref()).await?;
    tracing::debug!("suppliers: {} rows (search: {:?})", items.len(), search);
    Ok(items)
}
