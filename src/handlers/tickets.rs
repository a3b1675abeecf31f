// src/handlers/tickets.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{
        finance::Transaction,
        ticket::{Ticket, TicketDraft, TicketStatus},
    },
};

// ---
// Validação customizada para campos monetários
// ---
pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: abertura de ticket
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketPayload {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório."))]
    #[schema(example = "Carlos Silva")]
    pub customer_name: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    #[schema(example = "11987654321")]
    pub phone: String,

    #[validate(length(min = 1, message = "O modelo do aparelho é obrigatório."))]
    #[schema(example = "iPhone 13 Pro")]
    pub model: String,

    #[serde(default)]
    #[schema(example = "356789123456789")]
    pub imei: String,

    #[validate(length(min = 1, message = "A descrição do defeito é obrigatória."))]
    #[schema(example = "Tela quebrada")]
    pub issue: String,

    pub technician: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    #[schema(example = "450.00")]
    pub cost: Decimal,

    #[serde(default)]
    pub notes: Vec<String>,
}

// POST /api/tickets
#[utoipa::path(
    post,
    path = "/api/tickets",
    tag = "Tickets",
    request_body = CreateTicketPayload,
    responses(
        (status = 201, description = "Ticket aberto com status RECEIVED e paid = false", body = Ticket),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_ticket(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTicketPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let ticket = app_state.ticket_service.create(TicketDraft {
        customer_name: payload.customer_name,
        phone: payload.phone,
        model: payload.model,
        imei: payload.imei,
        issue: payload.issue,
        technician: payload.technician,
        cost: payload.cost,
        notes: payload.notes,
    })?;

    Ok((StatusCode::CREATED, Json(ticket)))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTicketsParams {
    // Termo de busca: substring case-sensitive em nome, telefone e id.
    pub q: Option<String>,
}

// GET /api/tickets
#[utoipa::path(
    get,
    path = "/api/tickets",
    tag = "Tickets",
    params(ListTicketsParams),
    responses(
        (status = 200, description = "Tickets na ordem da coleção", body = Vec<Ticket>)
    )
)]
pub async fn list_tickets(
    State(app_state): State<AppState>,
    Query(params): Query<ListTicketsParams>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = match params.q.as_deref() {
        Some(term) if !term.is_empty() => app_state.ticket_service.search(term),
        _ => app_state.ticket_service.list(),
    };
    Ok((StatusCode::OK, Json(tickets)))
}

// ---
// Payload: edição (sobrescrita integral do registro)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketPayload {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório."))]
    pub customer_name: String,

    #[validate(length(min = 1, message = "O telefone é obrigatório."))]
    pub phone: String,

    #[validate(length(min = 1, message = "O modelo do aparelho é obrigatório."))]
    pub model: String,

    #[serde(default)]
    pub imei: String,

    #[validate(length(min = 1, message = "A descrição do defeito é obrigatória."))]
    pub issue: String,

    pub status: TicketStatus,

    pub technician: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost: Decimal,

    pub paid: bool,

    #[serde(default)]
    pub notes: Vec<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketResponse {
    // None = id inexistente; o contrato é no-op silencioso, não 404.
    pub ticket: Option<Ticket>,

    // Lançamento de receita gerado pela regra de entrega, quando disparou.
    pub auto_income: Option<Transaction>,
}

// PUT /api/tickets/{id}
#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    tag = "Tickets",
    request_body = UpdateTicketPayload,
    params(
        ("id" = String, Path, description = "Id do ticket")
    ),
    responses(
        (status = 200, description = "Registro sobrescrito (last-write-wins); id ausente é no-op", body = UpdateTicketResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn update_ticket(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTicketPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let result = app_state.ticket_service.update(Ticket {
        id,
        customer_name: payload.customer_name,
        phone: payload.phone,
        model: payload.model,
        imei: payload.imei,
        issue: payload.issue,
        status: payload.status,
        technician: payload.technician,
        cost: payload.cost,
        paid: payload.paid,
        notes: payload.notes,
        created_at: payload.created_at,
    })?;

    Ok((
        StatusCode::OK,
        Json(UpdateTicketResponse {
            ticket: result.ticket,
            auto_income: result.auto_income,
        }),
    ))
}

// DELETE /api/tickets/{id}
#[utoipa::path(
    delete,
    path = "/api/tickets/{id}",
    tag = "Tickets",
    params(
        ("id" = String, Path, description = "Id do ticket")
    ),
    responses(
        (status = 204, description = "Removido; id ausente é no-op silencioso")
    )
)]
pub async fn delete_ticket(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.ticket_service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateTicketPayload {
        CreateTicketPayload {
            customer_name: "Carlos Silva".to_string(),
            phone: "11987654321".to_string(),
            model: "iPhone 13 Pro".to_string(),
            imei: String::new(),
            issue: "Tela quebrada".to_string(),
            technician: None,
            cost: Decimal::new(450, 0),
            notes: Vec::new(),
        }
    }

    #[test]
    fn valor_negativo_e_rejeitado() {
        assert!(validate_not_negative(&Decimal::new(-1, 0)).is_err());
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&Decimal::new(450, 0)).is_ok());
    }

    #[test]
    fn abertura_valida_passa_na_fronteira() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn custo_negativo_e_barrado_na_fronteira() {
        let mut p = payload();
        p.cost = Decimal::new(-50, 0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn campos_obrigatorios_vazios_sao_barrados() {
        let mut sem_nome = payload();
        sem_nome.customer_name = String::new();
        assert!(sem_nome.validate().is_err());

        let mut sem_telefone = payload();
        sem_telefone.phone = String::new();
        assert!(sem_telefone.validate().is_err());

        let mut sem_defeito = payload();
        sem_defeito.issue = String::new();
        assert!(sem_defeito.validate().is_err());
    }

    #[test]
    fn edicao_com_custo_negativo_e_barrada() {
        let p = UpdateTicketPayload {
            customer_name: "Carlos Silva".to_string(),
            phone: "11987654321".to_string(),
            model: "iPhone 13 Pro".to_string(),
            imei: String::new(),
            issue: "Tela quebrada".to_string(),
            status: TicketStatus::Ready,
            technician: None,
            cost: Decimal::new(-200, 0),
            paid: false,
            notes: Vec::new(),
            created_at: Utc::now(),
        };
        assert!(p.validate().is_err());
    }
}
