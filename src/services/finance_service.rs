// src/services/finance_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Store,
    models::finance::{Transaction, TransactionType},
};

// O livro-caixa é append-only: este serviço só cria e lista. As receitas
// geradas pela entrega de tickets entram pelo TicketService, não por aqui.
#[derive(Clone)]
pub struct FinanceService {
    store: Store,
}

impl FinanceService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn add(
        &self,
        kind: TransactionType,
        category: String,
        amount: Decimal,
        description: String,
    ) -> Result<Transaction, AppError> {
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            category,
            amount,
            description,
            date: Utc::now(),
            ticket_id: None,
        };
        self.store.append_transaction(transaction)
    }

    pub fn list(&self) -> Vec<Transaction> {
        self.store.transactions()
    }
}
