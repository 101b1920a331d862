use std::sync::Arc;

use super::common::*;
use crate::workflows::anlage_v::buildings::RepositoryError;
use crate::workflows::anlage_v::form::FieldCode;
use crate::workflows::anlage_v::property::BuildingId;
use crate::workflows::anlage_v::report::ValidationStatus;
use crate::workflows::anlage_v::{
    PlausibilityRequest, PlausibilityService, PlausibilityServiceError, PlausibilityValidator,
};

fn request(building_id: Option<&str>) -> PlausibilityRequest {
    PlausibilityRequest {
        form_data: Some(complete_form().with(FieldCode::ReportedDepreciation, 9000.0)),
        building_id: building_id.map(|id| BuildingId(id.to_string())),
    }
}

#[test]
fn service_requires_form_data() {
    let service = build_service();

    match service.check(PlausibilityRequest::default()) {
        Err(PlausibilityServiceError::MissingFormData) => {}
        other => panic!("expected missing form data, got {other:?}"),
    }
}

#[test]
fn service_resolves_building_for_property_checks() {
    let service = build_service();

    let report = service
        .check(request(Some("b-2020")))
        .expect("validation runs");

    assert_eq!(report.status(), ValidationStatus::Invalid);
    assert!(finding_on(report.critical(), FieldCode::ReportedDepreciation).is_some());
}

#[test]
fn unknown_or_blank_building_skips_property_checks() {
    let service = build_service();

    for building_id in [Some("b-missing"), Some("  "), None] {
        let report = service
            .check(request(building_id))
            .expect("validation runs");
        assert!(report.critical().is_empty(), "building {building_id:?}");
        assert_eq!(report.status(), ValidationStatus::Valid);
    }
}

#[test]
fn repository_failures_surface_as_errors() {
    let service = PlausibilityService::new(
        Arc::new(UnavailableBuildings),
        PlausibilityValidator::default(),
    );

    match service.check(request(Some("b-2020"))) {
        Err(PlausibilityServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "entity store offline");
        }
        other => panic!("expected repository error, got {other:?}"),
    }
}

#[test]
fn repository_is_not_consulted_without_building() {
    let service = PlausibilityService::new(
        Arc::new(UnavailableBuildings),
        PlausibilityValidator::default(),
    );

    assert!(service.check(request(None)).is_ok());
}
