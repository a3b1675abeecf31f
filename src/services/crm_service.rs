// src/services/crm_service.rs

use std::collections::HashMap;

use crate::{
    db::Store,
    models::{crm::Customer, ticket::Ticket},
};

/// Deriva a carteira de clientes da lista de tickets, chaveada por
/// telefone, numa única passada. O nome gravado é o do PRIMEIRO ticket
/// encontrado para aquele telefone (só a data da última visita é
/// atualizada depois disso); a ordem do resultado é a ordem de primeira
/// aparição de cada telefone na varredura. Custos somam pagos e não pagos.
pub fn derive_customers(tickets: &[Ticket]) -> Vec<Customer> {
    let mut customers: Vec<Customer> = Vec::new();
    let mut index_by_phone: HashMap<&str, usize> = HashMap::new();

    for ticket in tickets {
        let index = match index_by_phone.get(ticket.phone.as_str()) {
            Some(&i) => i,
            None => {
                customers.push(Customer {
                    phone: ticket.phone.clone(),
                    name: ticket.customer_name.clone(),
                    total_visits: 0,
                    total_spent: rust_decimal::Decimal::ZERO,
                    last_visit: ticket.created_at,
                });
                index_by_phone.insert(ticket.phone.as_str(), customers.len() - 1);
                customers.len() - 1
            }
        };

        let customer = &mut customers[index];
        customer.total_visits += 1;
        customer.total_spent += ticket.cost;
        if ticket.created_at > customer.last_visit {
            customer.last_visit = ticket.created_at;
        }
    }

    customers
}

// Visão derivada, nunca materializada: recalcula a cada leitura.
#[derive(Clone)]
pub struct CrmService {
    store: Store,
}

impl CrmService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_customers(&self) -> Vec<Customer> {
        derive_customers(&self.store.tickets())
    }
}
