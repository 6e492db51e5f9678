use std::sync::Arc;

use crate::{
    provider::report_generator::ReportGenerator,
    repository::rental_history_repository::RentalHistoryRepository,
};

pub mod service;

/// Facade over the rental history and the report generator: single point of
/// access for rental retrieval/insertion and for triggering report runs.
#[derive(Clone)]
pub struct ReportService {
    rental_history_repository: Arc<dyn RentalHistoryRepository>,
    report_generator: Arc<dyn ReportGenerator>,
}

impl ReportService {
    pub fn new(
        rental_history_repository: Arc<dyn RentalHistoryRepository>,
        report_generator: Arc<dyn ReportGenerator>,
    ) -> Self {
        Self {
            rental_history_repository,
            report_generator,
        }
    }
}
