mod error;
mod events_repository;
mod pg_transaction_manager;
mod tickets_repository;
mod transaction_manager;

#[cfg(test)]
pub mod in_memory;

pub use error::*;
pub use events_repository::*;
pub use pg_transaction_manager::*;
pub use tickets_repository::*;
pub use transaction_manager::*;
