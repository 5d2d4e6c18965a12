use super::{
    AccessTokenRequest, AccessTokenResponse, Error, TicketApiService, TicketApiServiceConfig,
    TicketIssuanceRequest,
};
use axum::async_trait;
use reqwest::Client;
use uuid::Uuid;

pub struct HttpTicketApiService {
    config: TicketApiServiceConfig,
    http_client: Client,
}

impl HttpTicketApiService {
    pub fn new(config: TicketApiServiceConfig) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl TicketApiService for HttpTicketApiService {
    async fn authorize(&self) -> Result<String, Error> {
        let request = AccessTokenRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            audience: &self.config.audience,
            grant_type: "client_credentials",
        };

        let response = self
            .http_client
            .post(&self.config.token_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| Error::Authorization(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "token exchange failed");
            return Err(Error::Authorization(format!(
                "token endpoint returned {status}"
            )));
        }

        let token = response
            .json::<AccessTokenResponse>()
            .await
            .map_err(|err| Error::Authorization(err.to_string()))?;

        Ok(token.access_token)
    }

    async fn create_ticket(
        &self,
        access_token: &str,
        idempotency_key: Uuid,
        vatin: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), Error> {
        let request = TicketIssuanceRequest {
            vatin,
            first_name,
            last_name,
        };

        let response = self
            .http_client
            .post(&self.config.ticket_url)
            .bearer_auth(access_token)
            .header("Idempotency-Key", idempotency_key.to_string())
            .json(&request)
            .send()
            .await
            .map_err(|err| Error::Issuance {
                status: None,
                body: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body, "ticket api rejected issuance");
            return Err(Error::Issuance {
                status: Some(status.as_u16()),
                body,
            });
        }

        Ok(())
    }
}
