// src/models/inventory.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Abaixo disso o estoque aparece destacado como "acabando" no front.
pub const LOW_STOCK_THRESHOLD: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,

    #[schema(example = "Tela iPhone 13 Pro")]
    pub name: String,

    // Inteiro simples; o sistema não bloqueia estoque negativo.
    #[schema(example = 5)]
    pub quantity: i64,

    // Preço unitário de venda.
    #[schema(example = "300.00")]
    pub price: Decimal,
}

impl Part {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn part(quantity: i64) -> Part {
        Part {
            id: "1".to_string(),
            name: "Bateria Samsung S21".to_string(),
            quantity,
            price: Decimal::new(100, 0),
        }
    }

    #[test]
    fn estoque_baixo_abaixo_do_limite() {
        assert!(part(2).is_low_stock());
        assert!(part(0).is_low_stock());
    }

    #[test]
    fn estoque_ok_no_limite_ou_acima() {
        assert!(!part(3).is_low_stock());
        assert!(!part(5).is_low_stock());
    }
}
