use std::sync::Arc;

use thiserror::Error;

use crate::{
    model::{customer::Customer, rental::Rental, vehicle::Vehicle},
    provider::input_source::InputSource,
};

/// Renders the report variants from a snapshot of the rental history.
///
/// Implementations own all formatting and output; this crate only hands them
/// the data. Reports that solicit parameters (e.g. a target month) read them
/// from the supplied input source.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate_monthly_report(
        &self,
        rentals: &[Rental],
        input: Arc<dyn InputSource>,
    ) -> Result<(), ReportGeneratorError>;

    async fn generate_popular_vehicle_report(
        &self,
        rentals: &[Rental],
        input: Arc<dyn InputSource>,
    ) -> Result<(), ReportGeneratorError>;

    async fn generate_customer_report(&self, rentals: &[Rental])
        -> Result<(), ReportGeneratorError>;

    async fn generate_system_report(
        &self,
        rentals: &[Rental],
        vehicles: &[Vehicle],
        customers: &[Customer],
    ) -> Result<(), ReportGeneratorError>;
}

#[derive(Debug, Error)]
pub enum ReportGeneratorError {
    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),
    #[error("Invalid report parameter `{value}`: {reason}")]
    InvalidParameter { value: String, reason: String },
    #[error("Report output error: {0}")]
    Output(String),
}
