use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;
use coach_algo::{classify, partition, MasteryLevel, Skill, StudentProfile, Subject};
use serde::Serialize;

use crate::response::AppError;
use crate::routes::parse_student_id;
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    student: DashboardStudent,
    overall: OverallStatus,
    math: Vec<SkillStatus>,
    english: Vec<SkillStatus>,
    focus_areas: Vec<SkillStatus>,
    strong_areas: Vec<SkillStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardStudent {
    name: String,
    grade: u8,
    study_minutes: u32,
    assessment_attempt: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OverallStatus {
    percent: u32,
    level: MasteryLevel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SkillStatus {
    subject: Subject,
    skill: Skill,
    label: &'static str,
    percent: u32,
    level: MasteryLevel,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new().route("/:student_id", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;
    let profile = &record.profile;

    let (weak, strong) = partition(profile);
    let mean = profile.scores.values().sum::<f64>() / profile.scores.len() as f64;

    let response = DashboardResponse {
        student: DashboardStudent {
            name: profile.name.clone(),
            grade: profile.grade,
            study_minutes: profile.study_minutes,
            assessment_attempt: record.assessment_attempt,
        },
        overall: OverallStatus {
            percent: percent(mean),
            level: classify(mean),
        },
        math: subject_statuses(profile, Subject::Math),
        english: subject_statuses(profile, Subject::English),
        focus_areas: weak
            .iter()
            .take(3)
            .map(|s| skill_status(s.skill, s.score))
            .collect(),
        strong_areas: strong
            .iter()
            .take(3)
            .map(|s| skill_status(s.skill, s.score))
            .collect(),
    };

    Ok(Json(SuccessResponse {
        success: true,
        data: response,
    }))
}

/// Skill statuses for one subject in declaration order
fn subject_statuses(profile: &StudentProfile, subject: Subject) -> Vec<SkillStatus> {
    Skill::ALL
        .iter()
        .filter(|skill| skill.subject() == subject)
        .map(|&skill| skill_status(skill, profile.score(skill)))
        .collect()
}

fn skill_status(skill: Skill, score: f64) -> SkillStatus {
    SkillStatus {
        subject: skill.subject(),
        skill,
        label: skill.label(),
        percent: percent(score),
        level: classify(score),
    }
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}
