use super::{dto::Ticket, error::Error};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Counts tickets issued to the vatin.
    /// An empty vatin yields 0 without querying the store.
    ///
    async fn count_by_vatin(&self, vatin: &str) -> Result<i64, Error>;

    ///
    /// Inserts the ticket unless its vatin already holds `limit` tickets.
    /// The count and the insert run under a per-vatin lock in a single
    /// transaction, so two concurrent inserts for the same vatin cannot
    /// both slip below the limit.
    ///
    /// ### Errors
    /// - [Error::TicketLimitReached] when the vatin already holds `limit` tickets
    /// - [Error::InsertUniqueViolation] when a ticket with the same id exists
    ///
    async fn insert_within_limit(&self, ticket: &Ticket, limit: i64) -> Result<(), Error>;

    ///
    /// Finds one ticket by its id
    ///
    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, Error>;
}
