pub mod error;
pub mod rental_history_repository;

use std::sync::Arc;

use rental_history_repository::RentalHistoryRepository;

/// Hands out the repositories backing the service layer. Implemented by
/// whichever data provider the caller wires in.
pub trait DataRepository: Send + Sync {
    fn get_rental_history_repository(&self) -> Arc<dyn RentalHistoryRepository>;
}
