// src/models/ticket.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums ---

// As seis etapas do fluxo de trabalho, na ordem típica de progressão.
// A ordem NÃO é imposta: a edição pode pular ou voltar etapas livremente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Received,     // Aparelho recebido no balcão
    Assigned,     // Atribuído a um técnico
    InProgress,   // Em bancada
    WaitingParts, // Aguardando peça
    Ready,        // Pronto para retirada
    Delivered,    // Entregue ao cliente
}

impl TicketStatus {
    // Ordem de declaração, usada pelo histograma do dashboard.
    pub const ALL: [TicketStatus; 6] = [
        TicketStatus::Received,
        TicketStatus::Assigned,
        TicketStatus::InProgress,
        TicketStatus::WaitingParts,
        TicketStatus::Ready,
        TicketStatus::Delivered,
    ];
}

// --- Structs ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[schema(example = "1001")]
    pub id: String,

    #[schema(example = "Carlos Silva")]
    pub customer_name: String,

    #[schema(example = "11987654321")]
    pub phone: String,

    #[schema(example = "iPhone 13 Pro")]
    pub model: String,

    // IMEI / número de série. Opcional na prática; gravamos string vazia
    // quando o cliente não informa.
    #[serde(default)]
    #[schema(example = "356789123456789")]
    pub imei: String,

    #[schema(example = "Tela quebrada")]
    pub issue: String,

    pub status: TicketStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ali")]
    pub technician: Option<String>,

    #[schema(example = "450.00")]
    pub cost: Decimal,

    pub paid: bool,

    #[serde(default)]
    pub notes: Vec<String>,

    pub created_at: DateTime<Utc>,
}

// Rascunho de entrada: o que o balcão informa na abertura.
// id, status, paid e createdAt são decididos pelo sistema, nunca pelo chamador.
#[derive(Debug, Clone)]
pub struct TicketDraft {
    pub customer_name: String,
    pub phone: String,
    pub model: String,
    pub imei: String,
    pub issue: String,
    pub technician: Option<String>,
    pub cost: Decimal,
    pub notes: Vec<String>,
}
