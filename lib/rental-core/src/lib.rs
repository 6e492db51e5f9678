pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

use std::sync::Arc;

use provider::report_generator::ReportGenerator;
use repository::DataRepository;
use service::report::ReportService;

/// Entry point wiring the service layer to the injected collaborators.
#[derive(Clone)]
pub struct RentalCore {
    pub report_service: ReportService,
}

impl RentalCore {
    pub fn new(
        data_repository: Arc<dyn DataRepository>,
        report_generator: Arc<dyn ReportGenerator>,
    ) -> RentalCore {
        RentalCore {
            report_service: ReportService::new(
                data_repository.get_rental_history_repository(),
                report_generator,
            ),
        }
    }
}
