//!
//! HTML documents returned by the verification endpoints. Handlers pass
//! structured ticket data in; no business logic lives here.
//!

use crate::dto::output;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub fn owner_page(ticket: &output::Ticket, qr_data_uri: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Your ticket</title>
  </head>
  <body>
    <div class="ticket-display">
      <h1>Your ticket is ready</h1>
      <p>First name: {first_name}</p>
      <p>Last name: {last_name}</p>
      <p>VATIN: {vatin}</p>
      <p>Created at: {created_at}</p>
      <img src="{qr_data_uri}" alt="QR code">
    </div>
  </body>
</html>
"#,
        first_name = ticket.first_name,
        last_name = ticket.last_name,
        vatin = ticket.vatin,
        created_at = format_timestamp(ticket.created_at),
    )
}

/// Shown to anonymous scanners, so identity fields stay out
pub fn scan_page(ticket: &output::Ticket) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Ticket details</title>
  </head>
  <body>
    <div class="ticket-display">
      <h1>Ticket is valid</h1>
      <p>Ticket identifier: {id}</p>
      <p>Created at: {created_at}</p>
      <p>The QR code is no longer needed on this page.</p>
    </div>
  </body>
</html>
"#,
        id = ticket.id,
        created_at = format_timestamp(ticket.created_at),
    )
}

fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string())
}
