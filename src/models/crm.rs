// src/models/crm.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// Visão derivada, nunca persistida: recalculada a partir dos tickets a cada
// leitura, chaveada pelo telefone do cliente.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(example = "11987654321")]
    pub phone: String,

    // Nome do primeiro ticket encontrado para esse telefone na varredura.
    #[schema(example = "Carlos Silva")]
    pub name: String,

    #[schema(example = 2)]
    pub total_visits: u32,

    // Soma dos custos de todos os tickets, pagos ou não.
    #[schema(example = "650.00")]
    pub total_spent: Decimal,

    pub last_visit: DateTime<Utc>,
}
