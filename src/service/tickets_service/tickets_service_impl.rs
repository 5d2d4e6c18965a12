use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, Ticket, TicketsRepository},
    service::ticket_api_service::TicketApiService,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// Hard invariant: one vatin may never hold more than this many tickets
pub const MAX_TICKETS_PER_VATIN: i64 = 3;

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
    ticket_api: Arc<dyn TicketApiService>,
}

impl TicketsServiceImpl {
    pub fn new(
        repository: Arc<dyn TicketsRepository>,
        ticket_api: Arc<dyn TicketApiService>,
    ) -> Self {
        Self {
            repository,
            ticket_api,
        }
    }

    fn validate_ticket_request(request: &input::TicketRequest) -> Result<(), Error> {
        if request.vatin.is_empty() {
            return Err(Error::Validation("vatin is required"));
        }
        if request.first_name.is_empty() {
            return Err(Error::Validation("firstName is required"));
        }
        if request.last_name.is_empty() {
            return Err(Error::Validation("lastName is required"));
        }

        Ok(())
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn issue_ticket(
        &self,
        request: input::TicketRequest,
    ) -> Result<output::TicketId, Error> {
        tracing::info!("issuing ticket");
        tracing::trace!(?request);

        Self::validate_ticket_request(&request)?;

        // Cheap guard before any external call. The authoritative check
        // happens again inside insert_within_limit.
        let count = self.repository.count_by_vatin(&request.vatin).await?;
        if count >= MAX_TICKETS_PER_VATIN {
            return Err(Error::TicketLimitReached);
        }

        let access_token = self.ticket_api.authorize().await?;

        // The id doubles as the idempotency key of the external call, so
        // a replay after a partial failure cannot double-issue
        let id = Uuid::new_v4();
        self.ticket_api
            .create_ticket(
                &access_token,
                id,
                &request.vatin,
                &request.first_name,
                &request.last_name,
            )
            .await?;

        let ticket = Ticket {
            id,
            vatin: request.vatin,
            first_name: request.first_name,
            last_name: request.last_name,
            created_at: OffsetDateTime::now_utc(),
        };
        let insert_result = self
            .repository
            .insert_within_limit(&ticket, MAX_TICKETS_PER_VATIN)
            .await;

        match insert_result {
            Ok(()) => {
                tracing::info!(%id, "issued ticket");
                Ok(output::TicketId { id })
            }
            Err(repository::Error::TicketLimitReached) => {
                tracing::warn!(
                    %id,
                    "vatin reached limit between check and insert, \
                     external record stays replayable via idempotency key"
                );
                Err(Error::TicketLimitReached)
            }
            Err(err) => {
                tracing::error!(%id, "ticket recorded externally but not stored locally");
                Err(Error::Database(err))
            }
        }
    }

    async fn find_ticket(&self, id: Uuid) -> Result<output::Ticket, Error> {
        tracing::info!("finding ticket");

        let ticket = self
            .repository
            .find(id)
            .await?
            .ok_or(Error::TicketNotExist)?;

        tracing::info!("found ticket");

        Ok(ticket.into())
    }
}
