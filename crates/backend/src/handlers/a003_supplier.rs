use axum::{extract::Query, http::StatusCode, Json};

use super::ListQuery;
use crate::domain::a003_supplier;

/// GET /api/suppliers/list
pub async fn list(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<contracts::domain::a003_supplier::aggregate::Supplier>>, StatusCode> {
    match a003_supplier::service::list(query.search_text).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list suppliers: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
