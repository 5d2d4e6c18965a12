use super::ApplicationEnv;
use crate::{
    qr_code::QrCodeConfig,
    repository::TicketsRepositoryImpl,
    service::{
        ticket_api_service::{HttpTicketApiService, TicketApiService, TicketApiServiceConfig},
        tickets_service::{TicketsService, TicketsServiceImpl},
    },
};
use axum::extract::FromRef;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub qr_code_config: QrCodeConfig,
}

pub struct ApplicationStateToClose {
    pub db_pool: PgPool,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_pool = PgPoolOptions::new().connect(&env.database_url).await?;

    tracing::info!("running migrations");
    sqlx::migrate!().run(&db_pool).await?;

    tracing::info!("creating repositories");
    let tickets_repository = Arc::new(TicketsRepositoryImpl::new(db_pool.clone()));

    tracing::info!("creating services");
    let config = TicketApiServiceConfig {
        ticket_url: env.ticket_api_url.clone(),
        token_url: env.auth_token_url.clone(),
        client_id: env.auth_client_id.clone(),
        client_secret: env.auth_client_secret.clone(),
        audience: env.auth_audience.clone(),
        timeout: env.ticket_api_timeout,
    };
    let ticket_api_service = HttpTicketApiService::new(config)?;
    let ticket_api_service: Arc<dyn TicketApiService> = Arc::new(ticket_api_service);

    let tickets_service = TicketsServiceImpl::new(tickets_repository, ticket_api_service);
    let tickets_service = Arc::new(tickets_service);

    let qr_code_config = QrCodeConfig {
        base_url: env.base_url.clone(),
    };

    Ok((
        ApplicationState {
            tickets_service,
            qr_code_config,
        },
        ApplicationStateToClose { db_pool },
    ))
}
