use thiserror::Error;

use crate::{provider::report_generator::ReportGeneratorError, repository::error::DataLayerError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] DataLayerError),

    #[error("Report generation error: {0}")]
    ReportGenerator(#[from] ReportGeneratorError),
}
