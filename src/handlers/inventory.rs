// src/handlers/inventory.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::tickets::validate_not_negative,
    models::inventory::Part,
};

// Peça + o indicador de estoque baixo, calculado na leitura para o front
// não repetir o limite.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartView {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub low_stock: bool,
}

impl From<Part> for PartView {
    fn from(part: Part) -> Self {
        let low_stock = part.is_low_stock();
        Self {
            id: part.id,
            name: part.name,
            quantity: part.quantity,
            price: part.price,
            low_stock,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartPayload {
    #[validate(length(min = 1, message = "O nome da peça é obrigatório."))]
    #[schema(example = "Tela iPhone 13 Pro")]
    pub name: String,

    #[validate(range(min = 0, message = "A quantidade não pode ser negativa."))]
    #[schema(example = 5)]
    pub quantity: i64,

    #[validate(custom(function = "validate_not_negative"))]
    #[schema(example = "300.00")]
    pub price: Decimal,
}

// POST /api/inventory/parts
#[utoipa::path(
    post,
    path = "/api/inventory/parts",
    tag = "Inventário",
    request_body = CreatePartPayload,
    responses(
        (status = 201, description = "Peça cadastrada", body = PartView),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn create_part(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePartPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let part = app_state
        .inventory_service
        .add(payload.name, payload.quantity, payload.price)?;

    Ok((StatusCode::CREATED, Json(PartView::from(part))))
}

// GET /api/inventory/parts
#[utoipa::path(
    get,
    path = "/api/inventory/parts",
    tag = "Inventário",
    responses(
        (status = 200, description = "Estoque na ordem da coleção", body = Vec<PartView>)
    )
)]
pub async fn list_parts(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let parts: Vec<PartView> = app_state
        .inventory_service
        .list()
        .into_iter()
        .map(PartView::from)
        .collect();
    Ok((StatusCode::OK, Json(parts)))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartResponse {
    // None = id inexistente; o contrato é no-op silencioso, não 404.
    pub part: Option<PartView>,
}

// PUT /api/inventory/parts/{id}
#[utoipa::path(
    put,
    path = "/api/inventory/parts/{id}",
    tag = "Inventário",
    request_body = CreatePartPayload,
    params(
        ("id" = String, Path, description = "Id da peça")
    ),
    responses(
        (status = 200, description = "Registro sobrescrito; id ausente é no-op", body = UpdatePartResponse),
        (status = 400, description = "Dados inválidos")
    )
)]
pub async fn update_part(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreatePartPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let part = Part {
        id,
        name: payload.name,
        quantity: payload.quantity,
        price: payload.price,
    };
    let updated = app_state.inventory_service.update(part.clone())?;

    Ok((
        StatusCode::OK,
        Json(UpdatePartResponse {
            part: updated.then(|| PartView::from(part)),
        }),
    ))
}

// DELETE /api/inventory/parts/{id}
#[utoipa::path(
    delete,
    path = "/api/inventory/parts/{id}",
    tag = "Inventário",
    params(
        ("id" = String, Path, description = "Id da peça")
    ),
    responses(
        (status = 204, description = "Removida; id ausente é no-op silencioso")
    )
)]
pub async fn delete_part(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app_state.inventory_service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreatePartPayload {
        CreatePartPayload {
            name: "Tela iPhone 13 Pro".to_string(),
            quantity: 5,
            price: Decimal::new(300, 0),
        }
    }

    #[test]
    fn cadastro_valido_passa_na_fronteira() {
        assert!(payload().validate().is_ok());
    }

    #[test]
    fn quantidade_negativa_e_barrada() {
        let mut p = payload();
        p.quantity = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn preco_negativo_e_barrado() {
        let mut p = payload();
        p.price = Decimal::new(-25, 0);
        assert!(p.validate().is_err());
    }

    #[test]
    fn nome_vazio_e_barrado() {
        let mut p = payload();
        p.name = String::new();
        assert!(p.validate().is_err());
    }
}
