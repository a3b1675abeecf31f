// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Categoria fixa usada pelos lançamentos gerados na entrega de um ticket.
pub const MAINTENANCE_CATEGORY: &str = "Manutenção";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,  // Entrada
    Expense, // Saída
}

// Um lançamento do livro-caixa. O livro é append-only: nenhuma operação
// pública altera ou remove um lançamento depois de criado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440001")]
    pub id: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[schema(example = "Manutenção")]
    pub category: String,

    #[schema(example = "200.00")]
    pub amount: Decimal,

    #[schema(example = "Receita de manutenção do ticket 1002")]
    pub description: String,

    pub date: DateTime<Utc>,

    // Preenchido apenas nos lançamentos gerados automaticamente pela entrega.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
}
