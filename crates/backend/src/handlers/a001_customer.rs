use axum::{extract::Query, http::StatusCode, Json};

use super::ListQuery;
use crate::domain::a001_customer;

/// GET /api/customers/list
pub async fn list(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<contracts::domain::a001_customer::aggregate::Customer>>, StatusCode> {
    match a001_customer::service::list(query.search_text).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list customers: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
