use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::anlage_v::buildings::{BuildingCatalog, BuildingRepository, RepositoryError};
use crate::workflows::anlage_v::form::{FieldCode, FormSnapshot};
use crate::workflows::anlage_v::property::{BuildingId, PropertyContext, UsageType};
use crate::workflows::anlage_v::report::{Finding, ValidationReport};
use crate::workflows::anlage_v::{
    plausibility_router, PlausibilityService, PlausibilityValidator, TokenAuthenticator,
};

pub(super) const TOKEN: &str = "test-token";

pub(super) fn validated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 31, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

/// All required lines filled, income 2000 and expenses 500.
pub(super) fn complete_form() -> FormSnapshot {
    FormSnapshot::new()
        .with(FieldCode::PropertyAddress, "Lindenstraße 12")
        .with(FieldCode::PostalCodeCity, "10969 Berlin")
        .with(FieldCode::AcquisitionDate, "2020-03-01")
        .with(FieldCode::TotalArea, 80.0)
        .with(FieldCode::ReportedIncome, 2000.0)
        .with(FieldCode::ReportedExpenses, 500.0)
}

pub(super) fn building(year_built: i32) -> PropertyContext {
    PropertyContext {
        acquisition_price: Some(200_000.0),
        year_built: Some(year_built),
        usage_type: Some(UsageType::Residential),
        total_area: Some(80.0),
    }
}

pub(super) fn validate(
    form: &FormSnapshot,
    property: Option<&PropertyContext>,
) -> ValidationReport {
    PlausibilityValidator::default().validate_at(form, property, validated_at())
}

pub(super) fn finding_on(findings: &[Finding], field: FieldCode) -> Option<&Finding> {
    findings.iter().find(|finding| finding.field == Some(field))
}

pub(super) fn catalog() -> BuildingCatalog {
    let mut catalog = BuildingCatalog::default();
    catalog.insert(BuildingId("b-2020".to_string()), building(2020));
    catalog.insert(BuildingId("b-2024".to_string()), building(2024));
    catalog
}

pub(super) struct UnavailableBuildings;

impl BuildingRepository for UnavailableBuildings {
    fn fetch(&self, _id: &BuildingId) -> Result<Option<PropertyContext>, RepositoryError> {
        Err(RepositoryError::Unavailable("entity store offline".to_string()))
    }
}

pub(super) fn build_service() -> PlausibilityService<BuildingCatalog> {
    PlausibilityService::new(Arc::new(catalog()), PlausibilityValidator::default())
}

pub(super) fn authenticator() -> TokenAuthenticator {
    TokenAuthenticator::default().with_token(TOKEN, "steuerbuero")
}

pub(super) fn router_with<R>(service: PlausibilityService<R>) -> axum::Router
where
    R: BuildingRepository + 'static,
{
    plausibility_router(Arc::new(service), Arc::new(authenticator()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
