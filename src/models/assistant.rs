// src/models/assistant.rs

use serde::Serialize;
use utoipa::ToSchema;

// Resposta do assistente: só o texto, exibido como veio do serviço.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantReply {
    #[schema(example = "Verifique primeiro o conector de carga...")]
    pub answer: String,
}
