pub mod ticket_api_service;
pub mod tickets_service;
