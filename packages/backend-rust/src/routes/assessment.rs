use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use coach_algo::{apply_event, classify, AnswerEvent, Confidence, MasteryLevel, Skill, Subject};
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::routes::parse_student_id;
use crate::services::question_bank::{self, Difficulty};
use crate::state::AppState;

/// Fast answers come in under ten seconds; anything over thirty is assumed
/// to have needed a hint.
const FAST_LATENCY_MS: u64 = 10_000;
const NORMAL_LATENCY_MS: u64 = 30_000;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionListResponse {
    questions: Vec<QuestionResponse>,
    total: usize,
}

/// A question as served to the client. The correct option and explanation
/// stay server-side until an answer is graded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionResponse {
    id: &'static str,
    subject: Subject,
    skill: Skill,
    difficulty: Difficulty,
    prompt: &'static str,
    options: [&'static str; 4],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerRequest {
    question_id: String,
    selected_option: usize,
    response_time_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerResponse {
    correct: bool,
    correct_option: usize,
    explanation: &'static str,
    skill: Skill,
    confidence: Confidence,
    new_score: f64,
    level: MasteryLevel,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompleteResponse {
    completed: bool,
    assessment_attempt: u32,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/:student_id/questions", get(get_questions))
        .route("/:student_id/answers", post(submit_answer))
        .route("/:student_id/complete", post(complete_assessment))
}

async fn get_questions(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;

    let questions: Vec<QuestionResponse> = question_bank::questions_for_grade(record.profile.grade)
        .into_iter()
        .map(|question| QuestionResponse {
            id: question.id,
            subject: question.skill.subject(),
            skill: question.skill,
            difficulty: question.difficulty,
            prompt: question.prompt,
            options: question.options,
        })
        .collect();

    Ok(Json(SuccessResponse {
        success: true,
        data: QuestionListResponse {
            total: questions.len(),
            questions,
        },
    }))
}

async fn submit_answer(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;

    let question = question_bank::find(&request.question_id)
        .ok_or_else(|| AppError::not_found("Question not found"))?;

    if request.selected_option >= question.options.len() {
        return Err(AppError::validation("Selected option is out of range"));
    }

    let correct = request.selected_option == question.correct_index;
    let confidence = confidence_from_latency(request.response_time_ms);
    let event = AnswerEvent {
        skill: question.skill,
        correct,
        confidence,
    };

    let new_score = state
        .store()
        .modify(id, |record| apply_event(&mut record.profile, &event))
        .await?;

    tracing::debug!(
        student_id = %id,
        question_id = question.id,
        correct,
        new_score,
        "answer graded"
    );

    Ok(Json(SuccessResponse {
        success: true,
        data: AnswerResponse {
            correct,
            correct_option: question.correct_index,
            explanation: question.explanation,
            skill: question.skill,
            confidence,
            new_score,
            level: classify(new_score),
        },
    }))
}

async fn complete_assessment(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;

    let attempt = state
        .store()
        .modify(id, |record| {
            record.assessment_attempt += 1;
            record.assessment_attempt
        })
        .await?;

    tracing::info!(student_id = %id, attempt, "assessment round completed");

    Ok(Json(SuccessResponse {
        success: true,
        data: CompleteResponse {
            completed: true,
            assessment_attempt: attempt,
        },
    }))
}

/// Bucket raw answer latency into a confidence level
fn confidence_from_latency(response_time_ms: u64) -> Confidence {
    if response_time_ms < FAST_LATENCY_MS {
        Confidence::Fast
    } else if response_time_ms < NORMAL_LATENCY_MS {
        Confidence::Normal
    } else {
        Confidence::WithHint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_buckets() {
        assert_eq!(confidence_from_latency(0), Confidence::Fast);
        assert_eq!(confidence_from_latency(9_999), Confidence::Fast);
        assert_eq!(confidence_from_latency(10_000), Confidence::Normal);
        assert_eq!(confidence_from_latency(29_999), Confidence::Normal);
        assert_eq!(confidence_from_latency(30_000), Confidence::WithHint);
        assert_eq!(confidence_from_latency(120_000), Confidence::WithHint);
    }
}
