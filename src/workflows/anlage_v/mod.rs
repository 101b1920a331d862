//! Plausibility checks for the rental-income schedule (Anlage V).
//!
//! A filing arrives as a flat snapshot of line codes and values, optionally tied to a building
//! record. The validator runs a fixed battery of rules over that snapshot and returns a report
//! split into critical errors, warnings, and hints. Problems with the data are always reported
//! as findings; only a missing snapshot or a failing building lookup surface as errors.

pub mod auth;
pub mod buildings;
pub mod evaluation;
pub mod form;
pub mod market_rent;
pub mod property;
pub mod report;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, Authenticator, TokenAuthenticator};
pub use buildings::{BuildingCatalog, BuildingCatalogError, BuildingRepository, RepositoryError};
pub use evaluation::{PlausibilityConfig, PlausibilityValidator};
pub use form::{FieldCode, FieldValue, FormSnapshot};
pub use market_rent::{FlatRateEstimator, MarketRentEstimator};
pub use property::{BuildingId, PropertyContext, UsageType};
pub use report::{
    Finding, Severity, ValidationOverview, ValidationReport, ValidationResponse, ValidationStatus,
    ValidationSummary,
};
pub use router::plausibility_router;
pub use service::{PlausibilityRequest, PlausibilityService, PlausibilityServiceError};
