// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ticket::TicketStatus;

// 1. Resumo (os cards do topo)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_profit: Decimal,
    pub active_tickets: usize, // Nem READY nem DELIVERED
    pub ready_tickets: usize,
    pub total_tickets: usize,
}

// 2. Gráfico de status (pizza): um ponto por valor do enum, zeros inclusos.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountEntry {
    pub status: TicketStatus,
    pub count: usize,
}
