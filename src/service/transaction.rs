use crate::{error::Error, repository::TransactionManager};

///
/// Opens transaction for a service operation.
///
/// ### Errors
/// - [Error::TransactionUnavailable] when no connection could be acquired
///
pub async fn begin<M: TransactionManager>(manager: &M) -> Result<M::Transaction, Error> {
    manager.begin().await.map_err(Error::TransactionUnavailable)
}

///
/// Commits transaction when `result` is Ok, rolls it back otherwise.
///
/// ### Returns
/// `result` unchanged when commit succeeds or when it was already an error.
/// Rollback failure is only logged, the original error is kept.
///
/// ### Errors
/// - [Error::Database] when commit fails
///
pub async fn finish<M: TransactionManager, R>(
    manager: &M,
    transaction: M::Transaction,
    result: Result<R, Error>,
) -> Result<R, Error> {
    match result {
        Ok(value) => {
            manager.commit(transaction).await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = manager.rollback(transaction).await {
                tracing::error!(%rollback_err, "failed to rollback transaction");
            }
            Err(err)
        }
    }
}
