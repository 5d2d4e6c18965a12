use crate::repository;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: Uuid,
    pub vatin: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: OffsetDateTime,
}

impl From<repository::Ticket> for Ticket {
    fn from(ticket: repository::Ticket) -> Self {
        Self {
            id: ticket.id,
            vatin: ticket.vatin,
            first_name: ticket.first_name,
            last_name: ticket.last_name,
            created_at: ticket.created_at,
        }
    }
}
