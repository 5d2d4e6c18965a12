use anyhow::anyhow;
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub database_url: String,

    /// Public base URL of this service, embedded into QR payloads
    pub base_url: String,

    pub max_http_content_len: usize,

    pub ticket_api_url: String,
    pub ticket_api_timeout: Duration,

    pub auth_token_url: String,
    pub auth_client_id: String,
    pub auth_client_secret: String,
    pub auth_audience: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("QR_TICKET_SERVICE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("QR_TICKET_SERVICE_LOG_FILENAME")?;
        let bind_address = Self::env_var("QR_TICKET_SERVICE_BIND_ADDRESS")?.parse()?;
        let database_url = Self::env_var("QR_TICKET_SERVICE_DATABASE_URL")?;
        let base_url = Self::env_var("QR_TICKET_SERVICE_BASE_URL")?;
        let max_http_content_len =
            Self::env_var("QR_TICKET_SERVICE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let ticket_api_url = Self::env_var("QR_TICKET_SERVICE_TICKET_API_URL")?;
        let ticket_api_timeout =
            Self::env_var("QR_TICKET_SERVICE_TICKET_API_TIMEOUT")?.parse()?;
        let ticket_api_timeout = Duration::from_secs(ticket_api_timeout);
        let auth_token_url = Self::env_var("QR_TICKET_SERVICE_AUTH_TOKEN_URL")?;
        let auth_client_id = Self::env_var("QR_TICKET_SERVICE_AUTH_CLIENT_ID")?;
        let auth_client_secret = Self::env_var("QR_TICKET_SERVICE_AUTH_CLIENT_SECRET")?;
        let auth_audience = Self::env_var("QR_TICKET_SERVICE_AUTH_AUDIENCE")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            database_url,
            base_url,
            max_http_content_len,
            ticket_api_url,
            ticket_api_timeout,
            auth_token_url,
            auth_client_id,
            auth_client_secret,
            auth_audience,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
