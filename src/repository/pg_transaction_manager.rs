use super::{Error, TransactionManager};
use axum::async_trait;
use sqlx::{PgPool, Postgres};

pub type PgTransaction = sqlx::Transaction<'static, Postgres>;

pub struct PgTransactionManager {
    pool: PgPool,
}

impl PgTransactionManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionManager for PgTransactionManager {
    type Transaction = PgTransaction;

    async fn begin(&self) -> Result<Self::Transaction, Error> {
        let transaction = self.pool.begin().await?;

        Ok(transaction)
    }

    async fn commit(&self, transaction: Self::Transaction) -> Result<(), Error> {
        transaction.commit().await?;

        Ok(())
    }

    async fn rollback(&self, transaction: Self::Transaction) -> Result<(), Error> {
        transaction.rollback().await?;

        Ok(())
    }
}
