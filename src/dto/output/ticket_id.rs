use uuid::Uuid;

#[derive(Debug)]
pub struct TicketId {
    pub id: Uuid,
}
