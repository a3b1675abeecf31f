// src/services/ticket_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::Store,
    models::{
        finance::{Transaction, TransactionType, MAINTENANCE_CATEGORY},
        ticket::{Ticket, TicketDraft, TicketStatus},
    },
};

// Resultado de um Update: o registro gravado (None = id ausente, no-op)
// e o lançamento de receita gerado pela regra de entrega, se houver.
#[derive(Debug)]
pub struct TicketUpdate {
    pub ticket: Option<Ticket>,
    pub auto_income: Option<Transaction>,
}

/// Regra de entrega, isolada como função pura para ser testável sem
/// armazenamento nem HTTP: entregar um ticket cujo registro anterior
/// estava `paid = false` gera um lançamento de receita com o custo do
/// ticket. A regra avalia o `paid` ANTERIOR, não o do registro novo, e
/// não marca o ticket como pago: repetir o update com DELIVERED e
/// `paid` ainda false gera um lançamento duplicado. Comportamento
/// herdado do sistema original, documentado nos testes.
pub fn income_for_delivery(old: &Ticket, new: &Ticket) -> Option<Transaction> {
    if new.status != TicketStatus::Delivered || old.paid {
        return None;
    }
    Some(Transaction {
        id: Uuid::new_v4().to_string(),
        kind: TransactionType::Income,
        category: MAINTENANCE_CATEGORY.to_string(),
        amount: new.cost,
        description: format!("Receita de manutenção do ticket {}", new.id),
        date: Utc::now(),
        ticket_id: Some(new.id.clone()),
    })
}

#[derive(Clone)]
pub struct TicketService {
    store: Store,
}

impl TicketService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    // Abertura de ticket: o sistema decide id, status, paid e createdAt,
    // ignorando qualquer valor que o chamador tente impor.
    pub fn create(&self, draft: TicketDraft) -> Result<Ticket, AppError> {
        let ticket = Ticket {
            id: Uuid::new_v4().to_string(),
            customer_name: draft.customer_name,
            phone: draft.phone,
            model: draft.model,
            imei: draft.imei,
            issue: draft.issue,
            status: TicketStatus::Received,
            technician: draft.technician,
            cost: draft.cost,
            paid: false,
            notes: draft.notes,
            created_at: Utc::now(),
        };
        self.store.insert_ticket(ticket.clone())?;
        tracing::info!("🎫 Ticket {} aberto para {}", ticket.id, ticket.customer_name);
        Ok(ticket)
    }

    // Sobrescrita integral (last-write-wins) + regra de entrega.
    pub fn update(&self, ticket: Ticket) -> Result<TicketUpdate, AppError> {
        let Some(old) = self.store.replace_ticket(ticket.clone())? else {
            return Ok(TicketUpdate {
                ticket: None,
                auto_income: None,
            });
        };

        let auto_income = match income_for_delivery(&old, &ticket) {
            Some(income) => {
                tracing::info!(
                    "💰 Entrega do ticket {} gerou receita de {}",
                    ticket.id,
                    income.amount
                );
                Some(self.store.append_transaction(income)?)
            }
            None => None,
        };

        Ok(TicketUpdate {
            ticket: Some(ticket),
            auto_income,
        })
    }

    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.store.remove_ticket(id)
    }

    pub fn list(&self) -> Vec<Ticket> {
        self.store.tickets()
    }

    // Substring case-sensitive em nome, telefone e id, na ordem da coleção.
    pub fn search(&self, term: &str) -> Vec<Ticket> {
        self.store
            .tickets()
            .into_iter()
            .filter(|t| {
                t.customer_name.contains(term) || t.phone.contains(term) || t.id.contains(term)
            })
            .collect()
    }
}
