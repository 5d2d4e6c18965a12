#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authorization failed: {0}")]
    Authorization(String),

    #[error("issuance failed: status {status:?}: {body}")]
    Issuance { status: Option<u16>, body: String },
}
