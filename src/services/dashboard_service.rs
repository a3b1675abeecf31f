// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::{
    db::Store,
    models::{
        dashboard::{DashboardSummary, StatusCountEntry},
        finance::{Transaction, TransactionType},
        ticket::{Ticket, TicketStatus},
    },
};

// Agregações puras, sem memoização: o conjunto de dados é pequeno e a
// correção fica mais simples sem lógica de invalidação.

pub fn total_income(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Income)
        .map(|t| t.amount)
        .sum()
}

pub fn total_expense(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense)
        .map(|t| t.amount)
        .sum()
}

pub fn summarize(tickets: &[Ticket], transactions: &[Transaction]) -> DashboardSummary {
    let income = total_income(transactions);
    let expense = total_expense(transactions);

    DashboardSummary {
        total_income: income,
        total_expense: expense,
        net_profit: income - expense,
        active_tickets: tickets
            .iter()
            .filter(|t| t.status != TicketStatus::Ready && t.status != TicketStatus::Delivered)
            .count(),
        ready_tickets: tickets
            .iter()
            .filter(|t| t.status == TicketStatus::Ready)
            .count(),
        total_tickets: tickets.len(),
    }
}

// Um ponto por status, na ordem de declaração do enum, zeros inclusos.
pub fn status_histogram(tickets: &[Ticket]) -> Vec<StatusCountEntry> {
    TicketStatus::ALL
        .iter()
        .map(|&status| StatusCountEntry {
            status,
            count: tickets.iter().filter(|t| t.status == status).count(),
        })
        .collect()
}

#[derive(Clone)]
pub struct DashboardService {
    store: Store,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn summary(&self) -> DashboardSummary {
        summarize(&self.store.tickets(), &self.store.transactions())
    }

    pub fn status_chart(&self) -> Vec<StatusCountEntry> {
        status_histogram(&self.store.tickets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ticket(id: &str, cost: i64, status: TicketStatus) -> Ticket {
        Ticket {
            id: id.to_string(),
            customer_name: "Cliente".to_string(),
            phone: "11900000000".to_string(),
            model: "Samsung S21".to_string(),
            imei: String::new(),
            issue: "Problema na bateria".to_string(),
            status,
            technician: None,
            cost: Decimal::new(cost, 0),
            paid: false,
            notes: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn transaction(kind: TransactionType, amount: i64) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            category: "Geral".to_string(),
            amount: Decimal::new(amount, 0),
            description: String::new(),
            date: Utc::now(),
            ticket_id: None,
        }
    }

    // Cenário do seed: 1001 em andamento, 1002 pronto, caixa zerado.
    #[test]
    fn resumo_do_estado_inicial() {
        let tickets = vec![
            ticket("1001", 450, TicketStatus::InProgress),
            ticket("1002", 200, TicketStatus::Ready),
        ];

        let summary = summarize(&tickets, &[]);
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.active_tickets, 1);
        assert_eq!(summary.ready_tickets, 1);
        assert_eq!(summary.total_tickets, 2);
    }

    #[test]
    fn lucro_liquido_e_receita_menos_despesa() {
        let transactions = vec![
            transaction(TransactionType::Income, 500),
            transaction(TransactionType::Income, 200),
            transaction(TransactionType::Expense, 300),
        ];

        let summary = summarize(&[], &transactions);
        assert_eq!(summary.total_income, Decimal::new(700, 0));
        assert_eq!(summary.total_expense, Decimal::new(300, 0));
        assert_eq!(summary.net_profit, Decimal::new(400, 0));
    }

    #[test]
    fn histograma_cobre_todos_os_status_na_ordem_do_enum() {
        let tickets = vec![
            ticket("1", 10, TicketStatus::Received),
            ticket("2", 10, TicketStatus::Received),
            ticket("3", 10, TicketStatus::Delivered),
        ];

        let histogram = status_histogram(&tickets);
        assert_eq!(histogram.len(), TicketStatus::ALL.len());
        assert_eq!(histogram[0].status, TicketStatus::Received);
        assert_eq!(histogram[0].count, 2);
        assert_eq!(histogram[5].status, TicketStatus::Delivered);
        assert_eq!(histogram[5].count, 1);

        // A soma dos pontos é o total de tickets
        let total: usize = histogram.iter().map(|e| e.count).sum();
        assert_eq!(total, tickets.len());
    }

    #[test]
    fn histograma_de_lista_vazia_so_tem_zeros() {
        let histogram = status_histogram(&[]);
        assert_eq!(histogram.len(), 6);
        assert!(histogram.iter().all(|e| e.count == 0));
    }
}
