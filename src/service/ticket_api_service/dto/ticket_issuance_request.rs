use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketIssuanceRequest<'a> {
    pub vatin: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}
