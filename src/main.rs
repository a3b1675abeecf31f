//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve
    // iniciar. O seed dos dados de exemplo roda dentro da abertura do store.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let ticket_routes = Router::new()
        .route(
            "/",
            post(handlers::tickets::create_ticket).get(handlers::tickets::list_tickets),
        )
        .route(
            "/{id}",
            axum::routing::put(handlers::tickets::update_ticket)
                .delete(handlers::tickets::delete_ticket),
        );

    let inventory_routes = Router::new()
        .route(
            "/parts",
            post(handlers::inventory::create_part).get(handlers::inventory::list_parts),
        )
        .route(
            "/parts/{id}",
            axum::routing::put(handlers::inventory::update_part)
                .delete(handlers::inventory::delete_part),
        );

    let finance_routes = Router::new().route(
        "/transactions",
        post(handlers::finance::create_transaction).get(handlers::finance::list_transactions),
    );

    let crm_routes = Router::new().route("/customers", get(handlers::crm::list_customers));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/status-chart", get(handlers::dashboard::get_status_chart));

    let assistant_routes = Router::new().route("/ask", post(handlers::assistant::ask));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/tickets", ticket_routes)
        .nest("/api/inventory", inventory_routes)
        .nest("/api/finance", finance_routes)
        .nest("/api/crm", crm_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/assistant", assistant_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state.clone());

    // Inicia o servidor
    let listener = TcpListener::bind(&app_state.bind_addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener.local_addr().expect("endereço local indisponível")
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
