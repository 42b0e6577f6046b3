use super::Error;
use axum::async_trait;

///
/// Source of transactions that repositories operate on.
///
/// Every repository call receives the transaction explicitly,
/// so all reads and writes of one operation share its fate.
/// Dropping a transaction without committing it rolls it back.
///
#[cfg_attr(test, mockall::automock(type Transaction = ();))]
#[async_trait]
pub trait TransactionManager: Send + Sync + 'static {
    type Transaction: Send + Sync + 'static;

    async fn begin(&self) -> Result<Self::Transaction, Error>;

    async fn commit(&self, transaction: Self::Transaction) -> Result<(), Error>;

    async fn rollback(&self, transaction: Self::Transaction) -> Result<(), Error>;
}
