mod ticket_request;

pub use ticket_request::*;
