use serde::Deserialize;

/// Issuance form. Fields default to empty strings so that an absent
/// field fails presence validation instead of form deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    #[serde(default)]
    pub vatin: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}
