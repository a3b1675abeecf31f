pub mod tickets;
pub mod inventory;
pub mod finance;
pub mod crm;
pub mod dashboard;
pub mod assistant;
