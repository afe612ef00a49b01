use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};
use coach_algo::{StudentProfile, MAX_GRADE, MIN_GRADE, STUDY_MINUTES_OPTIONS};
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::routes::parse_student_id;
use crate::state::AppState;
use crate::store::StudentRecord;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateStudentRequest {
    name: String,
    grade: u8,
    study_time_per_day: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StudentResponse {
    id: String,
    name: String,
    grade: u8,
    study_minutes: u32,
    assessment_attempt: u32,
    created_at: String,
    updated_at: String,
}

impl From<StudentRecord> for StudentResponse {
    fn from(record: StudentRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.profile.name.clone(),
            grade: record.profile.grade,
            study_minutes: record.profile.study_minutes,
            assessment_attempt: record.assessment_attempt,
            created_at: iso(record.created_at),
            updated_at: iso(record.updated_at),
        }
    }
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", post(create_student))
        .route("/:student_id", get(get_student))
}

async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Student name must not be empty"));
    }
    if !(MIN_GRADE..=MAX_GRADE).contains(&request.grade) {
        return Err(AppError::validation("Grade must be between 1 and 5"));
    }
    if !STUDY_MINUTES_OPTIONS.contains(&request.study_time_per_day) {
        return Err(AppError::validation(
            "Study time must be 15, 30, 45 or 60 minutes",
        ));
    }

    let profile = StudentProfile::new(name, request.grade, request.study_time_per_day);
    let record = state.store().create(profile).await;

    tracing::info!(student_id = %record.id, grade = record.profile.grade, "student enrolled");

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            success: true,
            data: StudentResponse::from(record),
        }),
    ))
}

async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;

    Ok(Json(SuccessResponse {
        success: true,
        data: StudentResponse::from(record),
    }))
}

fn iso(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
