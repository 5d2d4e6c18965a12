#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("ticket limit reached")]
    TicketLimitReached,

    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}
