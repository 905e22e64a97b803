use axum::{extract::Query, http::StatusCode, Json};

use super::ListQuery;
use crate::domain::a002_employee;

/// GET /api/employees/list
pub async fn list(
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<contracts::domain::a002_employee::aggregate::Employee>>, StatusCode> {
    match a002_employee::service::list(query.search_text).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list employees: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
