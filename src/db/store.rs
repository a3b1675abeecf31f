// src/db/store.rs

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::storage::{StorageAdapter, PARTS_KEY, TICKETS_KEY, TRANSACTIONS_KEY},
    models::{
        finance::Transaction,
        inventory::Part,
        ticket::{Ticket, TicketStatus},
    },
};

struct StoreInner {
    tickets: Vec<Ticket>,
    parts: Vec<Part>,
    transactions: Vec<Transaction>,
}

// Dono único das três coleções em memória. Toda mutação é síncrona:
// altera a coleção e persiste o slot inteiro antes de retornar. O Save
// é disparado pelo próprio store, não por um observador externo.
#[derive(Clone)]
pub struct Store {
    storage: StorageAdapter,
    inner: Arc<Mutex<StoreInner>>,
}

impl Store {
    // Semeia os dados padrão se necessário e carrega as três coleções.
    pub fn open(storage: StorageAdapter) -> Result<Self, AppError> {
        seed_once(&storage)?;

        let inner = StoreInner {
            tickets: load_or_empty(&storage, TICKETS_KEY),
            parts: load_or_empty(&storage, PARTS_KEY),
            transactions: load_or_empty(&storage, TRANSACTIONS_KEY),
        };

        tracing::info!(
            "📦 Armazenamento carregado: {} tickets, {} peças, {} lançamentos",
            inner.tickets.len(),
            inner.parts.len(),
            inner.transactions.len()
        );

        Ok(Self {
            storage,
            inner: Arc::new(Mutex::new(inner)),
        })
    }

    fn locked(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("mutex do store envenenado")
    }

    // ---
    // Tickets
    // ---

    pub fn tickets(&self) -> Vec<Ticket> {
        self.locked().tickets.clone()
    }

    pub fn insert_ticket(&self, ticket: Ticket) -> Result<(), AppError> {
        let mut inner = self.locked();
        inner.tickets.push(ticket);
        self.storage.save(TICKETS_KEY, &inner.tickets)
    }

    // Sobrescrita integral por id (last-write-wins). Retorna o registro
    // anterior para o chamador avaliar a regra de entrega; id ausente é
    // no-op silencioso (None).
    pub fn replace_ticket(&self, ticket: Ticket) -> Result<Option<Ticket>, AppError> {
        let mut inner = self.locked();
        let Some(slot) = inner.tickets.iter_mut().find(|t| t.id == ticket.id) else {
            return Ok(None);
        };
        let old = std::mem::replace(slot, ticket);
        self.storage.save(TICKETS_KEY, &inner.tickets)?;
        Ok(Some(old))
    }

    // Id ausente é no-op silencioso; só persiste quando algo mudou.
    pub fn remove_ticket(&self, id: &str) -> Result<bool, AppError> {
        let mut inner = self.locked();
        let before = inner.tickets.len();
        inner.tickets.retain(|t| t.id != id);
        if inner.tickets.len() == before {
            return Ok(false);
        }
        self.storage.save(TICKETS_KEY, &inner.tickets)?;
        Ok(true)
    }

    // ---
    // Peças
    // ---

    pub fn parts(&self) -> Vec<Part> {
        self.locked().parts.clone()
    }

    pub fn insert_part(&self, part: Part) -> Result<(), AppError> {
        let mut inner = self.locked();
        inner.parts.push(part);
        self.storage.save(PARTS_KEY, &inner.parts)
    }

    pub fn replace_part(&self, part: Part) -> Result<bool, AppError> {
        let mut inner = self.locked();
        let Some(slot) = inner.parts.iter_mut().find(|p| p.id == part.id) else {
            return Ok(false);
        };
        *slot = part;
        self.storage.save(PARTS_KEY, &inner.parts)?;
        Ok(true)
    }

    pub fn remove_part(&self, id: &str) -> Result<bool, AppError> {
        let mut inner = self.locked();
        let before = inner.parts.len();
        inner.parts.retain(|p| p.id != id);
        if inner.parts.len() == before {
            return Ok(false);
        }
        self.storage.save(PARTS_KEY, &inner.parts)?;
        Ok(true)
    }

    // ---
    // Lançamentos (append-only)
    // ---

    pub fn transactions(&self) -> Vec<Transaction> {
        self.locked().transactions.clone()
    }

    pub fn append_transaction(&self, transaction: Transaction) -> Result<Transaction, AppError> {
        let mut inner = self.locked();
        inner.transactions.push(transaction.clone());
        self.storage.save(TRANSACTIONS_KEY, &inner.transactions)?;
        Ok(transaction)
    }
}

// Leitura degradada: slot corrompido vira coleção vazia com aviso no log,
// nunca derruba a inicialização.
fn load_or_empty<T: serde::de::DeserializeOwned>(storage: &StorageAdapter, key: &str) -> Vec<T> {
    match storage.load(key) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::warn!("⚠️ Slot '{}' ilegível, tratando como vazio: {}", key, e);
            Vec::new()
        }
    }
}

// Grava o conjunto padrão na primeira execução. Tickets e peças são
// semeados de forma independente; lançamentos nunca são semeados.
fn seed_once(storage: &StorageAdapter) -> Result<(), AppError> {
    if !storage.exists(TICKETS_KEY) {
        storage.save(TICKETS_KEY, &default_tickets())?;
        tracing::info!("🌱 Tickets de exemplo gravados");
    }
    if !storage.exists(PARTS_KEY) {
        storage.save(PARTS_KEY, &default_parts())?;
        tracing::info!("🌱 Estoque de exemplo gravado");
    }
    Ok(())
}

fn default_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "1001".to_string(),
            customer_name: "Carlos Silva".to_string(),
            phone: "11987654321".to_string(),
            model: "iPhone 13 Pro".to_string(),
            imei: "356789123456789".to_string(),
            issue: "Tela quebrada".to_string(),
            status: TicketStatus::InProgress,
            technician: Some("Ali".to_string()),
            cost: Decimal::new(450, 0),
            paid: false,
            notes: vec!["Precisa de tela original".to_string()],
            created_at: Utc::now(),
        },
        Ticket {
            id: "1002".to_string(),
            customer_name: "Sara Almeida".to_string(),
            phone: "11912348765".to_string(),
            model: "Samsung S21".to_string(),
            imei: "359876543210987".to_string(),
            issue: "Problema na bateria".to_string(),
            status: TicketStatus::Ready,
            technician: Some("Miguel".to_string()),
            cost: Decimal::new(200, 0),
            paid: false,
            notes: Vec::new(),
            created_at: Utc::now() - Duration::days(1),
        },
    ]
}

fn default_parts() -> Vec<Part> {
    vec![
        Part {
            id: "1".to_string(),
            name: "Tela iPhone 13 Pro".to_string(),
            quantity: 5,
            price: Decimal::new(300, 0),
        },
        Part {
            id: "2".to_string(),
            name: "Bateria Samsung S21".to_string(),
            quantity: 10,
            price: Decimal::new(100, 0),
        },
        Part {
            id: "3".to_string(),
            name: "Conector de carga Type-C".to_string(),
            quantity: 20,
            price: Decimal::new(25, 0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageAdapter::new(dir.path()).unwrap();
        let store = Store::open(storage).unwrap();
        (dir, store)
    }

    #[test]
    fn seed_grava_tickets_e_pecas_mas_nao_lancamentos() {
        let (_dir, store) = open_store();

        let tickets = store.tickets();
        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].id, "1001");
        assert_eq!(tickets[1].id, "1002");
        assert_eq!(store.parts().len(), 3);
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn seed_nao_sobrescreve_dados_existentes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageAdapter::new(dir.path()).unwrap();
        {
            let store = Store::open(storage.clone()).unwrap();
            store.remove_ticket("1001").unwrap();
        }
        // Reabrir não deve ressemear o slot já existente
        let store = Store::open(storage).unwrap();
        assert_eq!(store.tickets().len(), 1);
    }

    #[test]
    fn remove_de_id_ausente_nao_altera_a_colecao() {
        let (_dir, store) = open_store();

        assert!(!store.remove_ticket("9999").unwrap());
        assert_eq!(store.tickets().len(), 2);

        assert!(!store.remove_part("9999").unwrap());
        assert_eq!(store.parts().len(), 3);
    }

    #[test]
    fn replace_de_id_ausente_e_no_op_silencioso() {
        let (_dir, store) = open_store();
        let mut ticket = store.tickets()[0].clone();
        ticket.id = "inexistente".to_string();

        assert!(store.replace_ticket(ticket).unwrap().is_none());
        assert_eq!(store.tickets().len(), 2);
    }

    #[test]
    fn mutacoes_sobrevivem_a_reabertura() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageAdapter::new(dir.path()).unwrap();
        {
            let store = Store::open(storage.clone()).unwrap();
            let mut ticket = store.tickets()[0].clone();
            ticket.status = TicketStatus::Ready;
            store.replace_ticket(ticket).unwrap();
        }

        let reopened = Store::open(storage).unwrap();
        assert_eq!(reopened.tickets()[0].status, TicketStatus::Ready);
    }

    #[test]
    fn slot_corrompido_degrada_para_vazio() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("repair_transactions.json"), b"###").unwrap();
        let storage = StorageAdapter::new(dir.path()).unwrap();

        let store = Store::open(storage).unwrap();
        assert!(store.transactions().is_empty());
    }
}
