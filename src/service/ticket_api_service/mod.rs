mod dto;
mod error;
mod http_ticket_api_service;
mod ticket_api_service;

pub use dto::*;
pub use error::*;
pub use http_ticket_api_service::*;
pub use ticket_api_service::*;
