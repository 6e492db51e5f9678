use std::sync::Arc;

use super::ReportService;
use crate::{
    model::{customer::Customer, rental::Rental, vehicle::Vehicle},
    provider::input_source::InputSource,
    service::error::ServiceError,
};

impl ReportService {
    /// Returns the rental history as currently recorded. The list is fetched
    /// from the repository on every call, never cached.
    pub async fn get_all_rentals(&self) -> Result<Vec<Rental>, ServiceError> {
        let rentals = self.rental_history_repository.get_rental_history().await?;

        Ok(rentals)
    }

    /// Records one rental in the shared history store.
    ///
    /// # Arguments
    ///
    /// * `rental` - Rental to append; well-formedness is the store's contract
    #[tracing::instrument(level = "debug", skip(self, rental), err(Debug))]
    pub async fn add_rental(&self, rental: Rental) -> Result<(), ServiceError> {
        self.rental_history_repository.add_rental(rental).await?;

        Ok(())
    }

    /// Runs the monthly report against the current rental history. The
    /// generator reads the target month from `input`.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn run_monthly_report(
        &self,
        input: Arc<dyn InputSource>,
    ) -> Result<(), ServiceError> {
        let rentals = self.rental_history_repository.get_rental_history().await?;
        self.report_generator
            .generate_monthly_report(&rentals, input)
            .await?;

        Ok(())
    }

    /// Runs the popular-vehicle report against the current rental history.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn run_popular_vehicle_report(
        &self,
        input: Arc<dyn InputSource>,
    ) -> Result<(), ServiceError> {
        let rentals = self.rental_history_repository.get_rental_history().await?;
        self.report_generator
            .generate_popular_vehicle_report(&rentals, input)
            .await?;

        Ok(())
    }

    /// Runs the customer report against the current rental history. Takes no
    /// interactive input.
    #[tracing::instrument(level = "debug", skip(self), err(Debug))]
    pub async fn run_customer_report(&self) -> Result<(), ServiceError> {
        let rentals = self.rental_history_repository.get_rental_history().await?;
        self.report_generator
            .generate_customer_report(&rentals)
            .await?;

        Ok(())
    }

    /// Runs the system-wide report: current rental history plus the fleet and
    /// customer lists supplied by the caller, passed through unmodified.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn run_system_report(
        &self,
        vehicles: &[Vehicle],
        customers: &[Customer],
    ) -> Result<(), ServiceError> {
        let rentals = self.rental_history_repository.get_rental_history().await?;
        self.report_generator
            .generate_system_report(&rentals, vehicles, customers)
            .await?;

        Ok(())
    }
}
