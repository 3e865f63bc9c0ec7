use crate::domain::aggregate;
use crate::domain::models::TeamSnapshot;
use crate::state::SharedState;
use crate::web::error::AppError;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct EmployeesQuery {
    #[serde(default, rename = "weekOffset")]
    week_offset: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesResponse {
    #[serde(flatten)]
    snapshot: TeamSnapshot,
    week_offset: u32,
}

// Non-numeric and negative offsets coerce to the current week.
fn coerce_offset(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|offset| *offset >= 0)
        .map(|offset| offset as u32)
        .unwrap_or(0)
}

pub async fn get_employees(
    State(state): State<SharedState>,
    Query(query): Query<EmployeesQuery>,
) -> Result<Json<EmployeesResponse>, AppError> {
    let week_offset = coerce_offset(query.week_offset.as_deref());
    let snapshot = aggregate::team_snapshot(state.gateway.as_ref(), &state.config, week_offset).await;
    Ok(Json(EmployeesResponse {
        snapshot,
        week_offset,
    }))
}
