use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issue a new ticket: validate the request, enforce the per-vatin
    /// limit, record the ticket with the external ticketing authority
    /// and persist it locally.
    ///
    /// ### Returns
    /// ID of the issued ticket
    ///
    /// ### Errors
    /// - [Error::Validation] when vatin, firstName or lastName is missing
    /// - [Error::TicketLimitReached] when the vatin already holds the
    ///   maximum number of tickets
    /// - [Error::TicketApi] when authorization or external issuance fails
    /// - [Error::Database] when local persistence fails
    ///
    async fn issue_ticket(&self, request: input::TicketRequest)
        -> Result<output::TicketId, Error>;

    ///
    /// Find an issued ticket
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when no ticket with the id exists
    ///
    async fn find_ticket(&self, id: Uuid) -> Result<output::Ticket, Error>;
}
