// src/config.rs

use std::env;

use crate::{
    db::{StorageAdapter, Store},
    services::{
        AssistantService, CrmService, DashboardService, FinanceService, InventoryService,
        TicketService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub bind_addr: String,
    pub ticket_service: TicketService,
    pub inventory_service: InventoryService,
    pub finance_service: FinanceService,
    pub crm_service: CrmService,
    pub dashboard_service: DashboardService,
    pub assistant_service: AssistantService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // Sem chave o assistente continua de pé, respondendo a mensagem fixa.
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        if gemini_api_key.is_none() {
            tracing::warn!("⚠️ GEMINI_API_KEY ausente; o assistente responderá a mensagem fixa");
        }

        let storage = StorageAdapter::new(&data_dir)?;
        let store = Store::open(storage)?;
        tracing::info!("✅ Armazenamento aberto em '{}'", data_dir);

        // --- Monta o gráfico de dependências ---
        Ok(Self {
            bind_addr,
            ticket_service: TicketService::new(store.clone()),
            inventory_service: InventoryService::new(store.clone()),
            finance_service: FinanceService::new(store.clone()),
            crm_service: CrmService::new(store.clone()),
            dashboard_service: DashboardService::new(store),
            assistant_service: AssistantService::new(gemini_api_key, gemini_model)?,
        })
    }
}
