use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::response::AppError;
use crate::routes::parse_student_id;
use crate::services::chatbot::{self, ChatSession};
use crate::state::AppState;

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatStateResponse {
    greeting: &'static str,
    session: ChatSession,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatMessageRequest {
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatMessageResponse {
    reply: String,
    session: ChatSession,
}

pub fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/:student_id", get(get_chat_state))
        .route("/:student_id/message", post(send_message))
}

async fn get_chat_state(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;
    let record = state.store().get(id).await?;

    Ok(Json(SuccessResponse {
        success: true,
        data: ChatStateResponse {
            greeting: chatbot::GREETING,
            session: record.chat,
        },
    }))
}

async fn send_message(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(request): Json<ChatMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&student_id)?;

    let message = request.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::validation("Message must not be empty"));
    }

    let (reply, session) = state
        .store()
        .modify(id, |record| {
            let reply = chatbot::respond(&mut record.chat, &message);
            (reply, record.chat.clone())
        })
        .await?;

    Ok(Json(SuccessResponse {
        success: true,
        data: ChatMessageResponse { reply, session },
    }))
}
