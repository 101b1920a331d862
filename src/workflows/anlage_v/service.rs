use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::buildings::{BuildingRepository, RepositoryError};
use super::evaluation::PlausibilityValidator;
use super::form::FormSnapshot;
use super::property::{BuildingId, PropertyContext};
use super::report::ValidationReport;

/// Body accepted by the validation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlausibilityRequest {
    #[serde(default)]
    pub form_data: Option<FormSnapshot>,
    #[serde(default)]
    pub building_id: Option<BuildingId>,
}

/// Service resolving the referenced building and running the validator.
pub struct PlausibilityService<R> {
    repository: Arc<R>,
    validator: Arc<PlausibilityValidator>,
}

impl<R> PlausibilityService<R>
where
    R: BuildingRepository + 'static,
{
    pub fn new(repository: Arc<R>, validator: PlausibilityValidator) -> Self {
        Self {
            repository,
            validator: Arc::new(validator),
        }
    }

    pub fn validator(&self) -> &PlausibilityValidator {
        &self.validator
    }

    /// Validate a submitted form. Plausibility problems are reported as findings, not errors.
    pub fn check(
        &self,
        request: PlausibilityRequest,
    ) -> Result<ValidationReport, PlausibilityServiceError> {
        let PlausibilityRequest {
            form_data,
            building_id,
        } = request;

        let form = form_data.ok_or(PlausibilityServiceError::MissingFormData)?;
        let building_id = building_id.filter(|id| !id.0.trim().is_empty());
        let property = match &building_id {
            Some(id) => self.resolve(id)?,
            None => None,
        };

        let report = self.validator.validate(&form, property.as_ref());
        let summary = report.summary();
        debug!(
            status = report.status().label(),
            critical = summary.critical_errors,
            warnings = summary.warnings,
            hints = summary.hints,
            building_id = ?building_id,
            "anlage v validated"
        );

        Ok(report)
    }

    /// An unknown building is not an error: the dependent checks are skipped.
    fn resolve(&self, id: &BuildingId) -> Result<Option<PropertyContext>, RepositoryError> {
        let property = self.repository.fetch(id)?;
        if property.is_none() {
            warn!(building_id = %id, "building not found; property checks skipped");
        }
        Ok(property)
    }
}

/// Error raised by the plausibility service.
#[derive(Debug, thiserror::Error)]
pub enum PlausibilityServiceError {
    #[error("form_data is required")]
    MissingFormData,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
