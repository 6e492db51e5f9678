use crate::{model::rental::Rental, repository::error::DataLayerError};

/// The rental-history store. The store owns the history; callers always see
/// the sequence as currently recorded, in insertion order.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RentalHistoryRepository: Send + Sync {
    async fn get_rental_history(&self) -> Result<Vec<Rental>, DataLayerError>;

    async fn add_rental(&self, rental: Rental) -> Result<(), DataLayerError>;
}
