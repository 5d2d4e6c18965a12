//!
//! Binding between a ticket and its verification page. The QR payload is
//! the scan-view URL of the ticket, rendered as a PNG embeddable in HTML
//! as a data URI.
//!

use base64::{prelude::BASE64_STANDARD, Engine};
use image::{DynamicImage, ImageFormat};
use qrcode::QrCode;
use std::io::Cursor;
use uuid::Uuid;

#[derive(Clone)]
pub struct QrCodeConfig {
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("qr encode error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("png encode error: {0}")]
    Png(#[from] image::ImageError),
}

pub fn verification_url(config: &QrCodeConfig, ticket_id: Uuid) -> String {
    format!("{}/scanned/{}", config.base_url, ticket_id)
}

pub fn render_data_uri(url: &str) -> Result<String, Error> {
    let code = QrCode::new(url.as_bytes())?;
    let image = code.render::<image::Luma<u8>>().build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(format!(
        "data:image/png;base64,{}",
        BASE64_STANDARD.encode(png)
    ))
}
