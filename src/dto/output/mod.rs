mod ticket;
mod ticket_id;

pub use ticket::*;
pub use ticket_id::*;
