// src/handlers/finance.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::tickets::validate_not_negative,
    models::finance::{Transaction, TransactionType},
};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPayload {
    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    #[schema(example = "Aluguel")]
    pub category: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "1200.00")]
    pub amount: Decimal,

    #[serde(default)]
    #[schema(example = "Aluguel da loja, agosto")]
    pub description: String,
}

// POST /api/finance/transactions
#[utoipa::path(
    post,
    path = "/api/finance/transactions",
    tag = "Financeiro",
    request_body = CreateTransactionPayload,
    responses(
        (status = 201, description = "Lançamento registrado (o livro é append-only)", body = Transaction),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_transaction(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTransactionPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let transaction = app_state.finance_service.add(
        payload.kind,
        payload.category,
        payload.amount,
        payload.description,
    )?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

// GET /api/finance/transactions
#[utoipa::path(
    get,
    path = "/api/finance/transactions",
    tag = "Financeiro",
    responses(
        (status = 200, description = "Lançamentos na ordem de criação", body = Vec<Transaction>)
    )
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(app_state.finance_service.list())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateTransactionPayload {
        CreateTransactionPayload {
            kind: TransactionType::Expense,
            category: "Aluguel".to_string(),
            amount: Decimal::new(1200, 0),
            description: String::new(),
        }
    }

    #[test]
    fn lancamento_valido_passa_na_fronteira() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn valor_negativo_e_barrado() {
        let mut p = payload();
        p.amount = Decimal::new(-100, 0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn categoria_vazia_e_barrada() {
        let mut p = payload();
        p.category = String::new();
        assert!(p.validate().is_err());
    }
}
