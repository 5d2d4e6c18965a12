use std::time::Duration;

pub struct TicketApiServiceConfig {
    pub ticket_url: String,
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub audience: String,
    /// Upper bound for each outbound call, token exchange and issuance alike
    pub timeout: Duration,
}
