use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use serde::Serialize;

use crate::response::AppError;
use crate::routes::parse_student_id;
use crate::services::plan;
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/:student_id/daily", get(get_daily_plan))
        .route("/:student_id/weekly", get(get_weekly_plan))
}

async fn get_daily_plan(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;

    Ok(Json(SuccessResponse {
        success: true,
        data: plan::daily_plan(&record.profile),
    }))
}

async fn get_weekly_plan(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;

    Ok(Json(SuccessResponse {
        success: true,
        data: plan::weekly_plan(&record.profile),
    }))
}
