// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Tickets ---
        handlers::tickets::create_ticket,
        handlers::tickets::list_tickets,
        handlers::tickets::update_ticket,
        handlers::tickets::delete_ticket,

        // --- Inventário ---
        handlers::inventory::create_part,
        handlers::inventory::list_parts,
        handlers::inventory::update_part,
        handlers::inventory::delete_part,

        // --- Financeiro ---
        handlers::finance::create_transaction,
        handlers::finance::list_transactions,

        // --- CRM ---
        handlers::crm::list_customers,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_status_chart,

        // --- Assistente ---
        handlers::assistant::ask,
    ),
    components(
        schemas(
            // --- Tickets ---
            models::ticket::Ticket,
            models::ticket::TicketStatus,
            handlers::tickets::CreateTicketPayload,
            handlers::tickets::UpdateTicketPayload,
            handlers::tickets::UpdateTicketResponse,

            // --- Inventário ---
            models::inventory::Part,
            handlers::inventory::CreatePartPayload,
            handlers::inventory::PartView,
            handlers::inventory::UpdatePartResponse,

            // --- Financeiro ---
            models::finance::Transaction,
            models::finance::TransactionType,
            handlers::finance::CreateTransactionPayload,

            // --- CRM ---
            models::crm::Customer,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::StatusCountEntry,

            // --- Assistente ---
            models::assistant::AssistantReply,
            handlers::assistant::AskPayload,
        )
    ),
    tags(
        (name = "Tickets", description = "Ciclo de vida dos tickets de reparo"),
        (name = "Inventário", description = "Estoque de peças de reposição"),
        (name = "Financeiro", description = "Livro-caixa (append-only)"),
        (name = "CRM", description = "Carteira de clientes derivada dos tickets"),
        (name = "Dashboard", description = "Agregações para a visão geral"),
        (name = "Assistente", description = "Ponte para o serviço de texto generativo"),
    )
)]
pub struct ApiDoc;
