// src/handlers/assistant.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{common::error::AppError, config::AppState, models::assistant::AssistantReply};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AskPayload {
    #[validate(length(min = 1, message = "A pergunta é obrigatória."))]
    #[schema(example = "Como resolvo problema de carga num iPhone 11?")]
    pub question: String,
}

// POST /api/assistant/ask
//
// Melhor esforço: falha do serviço externo vira mensagem fixa no corpo,
// nunca um erro HTTP.
#[utoipa::path(
    post,
    path = "/api/assistant/ask",
    tag = "Assistente",
    request_body = AskPayload,
    responses(
        (status = 200, description = "Resposta do assistente (ou mensagem fixa de indisponibilidade)", body = AssistantReply),
        (status = 400, description = "Pergunta vazia")
    )
)]
pub async fn ask(
    State(app_state): State<AppState>,
    Json(payload): Json<AskPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let answer = app_state.assistant_service.ask(&payload.question).await;
    Ok((StatusCode::OK, Json(AssistantReply { answer })))
}
