use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::response::AppError;
use crate::routes::parse_student_id;
use crate::services::report::{self, ProgressReport};
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportResponse {
    generated_at: String,
    #[serde(flatten)]
    report: ProgressReport,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/:student_id", get(get_report))
}

async fn get_report(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;

    let report = report::progress_report(&record.profile, record.assessment_attempt);

    Ok(Json(SuccessResponse {
        success: true,
        data: ReportResponse {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            report,
        },
    }))
}
