use super::{dto::Ticket, Error, TicketsRepository};
use axum::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct TicketsRepositoryImpl {
    pool: PgPool,
}

impl TicketsRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn count_by_vatin(&self, vatin: &str) -> Result<i64, Error> {
        if vatin.is_empty() {
            return Ok(0);
        }

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets WHERE vatin = $1")
            .bind(vatin)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn insert_within_limit(&self, ticket: &Ticket, limit: i64) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent inserts for one vatin; released on commit
        // or rollback
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1)::bigint)")
            .bind(&ticket.vatin)
            .execute(&mut *tx)
            .await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tickets WHERE vatin = $1")
            .bind(&ticket.vatin)
            .fetch_one(&mut *tx)
            .await?;
        if count >= limit {
            return Err(Error::TicketLimitReached);
        }

        sqlx::query(
            "INSERT INTO tickets (id, vatin, first_name, last_name, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(ticket.id)
        .bind(&ticket.vatin)
        .bind(&ticket.first_name)
        .bind(&ticket.last_name)
        .bind(ticket.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::InsertUniqueViolation
            }
            _ => Error::Sqlx(err),
        })?;

        tx.commit().await?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, Error> {
        let ticket = sqlx::query_as::<_, Ticket>(
            "SELECT id, vatin, first_name, last_name, created_at \
             FROM tickets WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(ticket)
    }
}
