mod access_token;
mod ticket_api_service_config;
mod ticket_issuance_request;

pub use access_token::*;
pub use ticket_api_service_config::*;
pub use ticket_issuance_request::*;
