use super::Error;
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketApiService: Send + Sync {
    ///
    /// Exchanges the fixed client credentials for a bearer token scoped
    /// to the ticketing audience. The token is used for a single
    /// issuance call and discarded.
    ///
    /// ### Errors
    /// - [Error::Authorization] on transport error or non-success response
    ///
    async fn authorize(&self) -> Result<String, Error>;

    ///
    /// Records the ticket with the external ticketing authority. This call
    /// is the system of record for the ticket's existence; local storage
    /// is a secondary record. `idempotency_key` lets a replayed issuance
    /// reuse the same external record instead of creating a duplicate.
    ///
    /// ### Errors
    /// - [Error::Issuance] on transport error or non-success response,
    ///   carrying the upstream status and body when available
    ///
    async fn create_ticket(
        &self,
        access_token: &str,
        idempotency_key: Uuid,
        vatin: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), Error>;
}
