// src/services/inventory_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{common::error::AppError, db::Store, models::inventory::Part};

// Sem regras de estoque aqui: nenhuma baixa automática ao consumir peça
// num ticket e nenhuma rejeição de quantidade negativa. O destaque de
// estoque baixo é uma preocupação de exibição (Part::is_low_stock).
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

impl InventoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn add(&self, name: String, quantity: i64, price: Decimal) -> Result<Part, AppError> {
        let part = Part {
            id: Uuid::new_v4().to_string(),
            name,
            quantity,
            price,
        };
        self.store.insert_part(part.clone())?;
        Ok(part)
    }

    // Sobrescrita integral por id; id ausente é no-op silencioso.
    pub fn update(&self, part: Part) -> Result<bool, AppError> {
        self.store.replace_part(part)
    }

    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store.remove_part(id)
    }

    pub fn list(&self) -> Vec<Part> {
        self.store.parts()
    }
}
