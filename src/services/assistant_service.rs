// src/services/assistant_service.rs

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// Instrução fixa anteposta a toda pergunta do técnico.
const INSTRUCTION_PREFIX: &str = "Você é um assistente especialista em manutenção de \
smartphones. Responda em português, de forma curta e útil. Pergunta: ";

// Mensagens fixas de fallback: o assistente é melhor-esforço e nunca
// propaga falha para o resto do sistema.
const NO_KEY_MESSAGE: &str = "Desculpe, a chave da API não foi configurada.";
const NO_ANSWER_MESSAGE: &str = "Não consegui obter uma resposta.";
const FAILURE_MESSAGE: &str = "Ocorreu um erro ao contactar o assistente.";

// --- Formato do generateContent ---

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

// Ponte para o serviço de texto generativo: uma chamada por pergunta,
// sem retry e sem fila. Sem chave configurada, degrada para a mensagem
// fixa sem sair do processo.
#[derive(Clone)]
pub struct AssistantService {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl AssistantService {
    // Falha ao montar o cliente HTTP é falha de inicialização: propaga
    // para o startup em vez de mascarar aqui.
    pub fn new(api_key: Option<String>, model: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    pub async fn ask(&self, question: &str) -> String {
        let Some(api_key) = &self.api_key else {
            return NO_KEY_MESSAGE.to_string();
        };

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart {
                    text: format!("{INSTRUCTION_PREFIX}{question}"),
                }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let result = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("⚠️ Falha na chamada ao assistente: {}", e);
                return FAILURE_MESSAGE.to_string();
            }
        };

        if !response.status().is_success() {
            tracing::warn!("⚠️ Assistente respondeu com status {}", response.status());
            return FAILURE_MESSAGE.to_string();
        }

        match response.json::<GenerateContentResponse>().await {
            Ok(body) => extract_text(body).unwrap_or_else(|| NO_ANSWER_MESSAGE.to_string()),
            Err(e) => {
                tracing::warn!("⚠️ Resposta do assistente ilegível: {}", e);
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}

fn extract_text(body: GenerateContentResponse) -> Option<String> {
    let text = body
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text;
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
