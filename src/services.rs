pub mod ticket_service;
pub use ticket_service::TicketService;
pub mod inventory_service;
pub use inventory_service::InventoryService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod crm_service;
pub use crm_service::CrmService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod assistant_service;
pub use assistant_service::AssistantService;
