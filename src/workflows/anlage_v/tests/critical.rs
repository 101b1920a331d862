use super::common::*;
use crate::workflows::anlage_v::form::{FieldCode, FormSnapshot};
use crate::workflows::anlage_v::property::PropertyContext;
use crate::workflows::anlage_v::report::{Severity, ValidationStatus};
use serde_json::json;

#[test]
fn blank_required_lines_each_block_submission() {
    let form: FormSnapshot = serde_json::from_value(json!({
        "zeile_4": "",
        "zeile_5": "",
        "zeile_7": null,
        "zeile_10": 0
    }))
    .expect("snapshot parses");

    let report = validate(&form, None);

    let fields: Vec<_> = report
        .critical()
        .iter()
        .map(|finding| finding.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            Some(FieldCode::PropertyAddress),
            Some(FieldCode::PostalCodeCity),
            Some(FieldCode::AcquisitionDate),
            Some(FieldCode::TotalArea),
        ]
    );
    assert!(report
        .critical()
        .iter()
        .all(|finding| finding.severity == Severity::Critical && finding.fix.is_some()));
    assert_eq!(report.status(), ValidationStatus::Invalid);
    assert!(!report.can_submit());
    assert!(report.warnings().is_empty());
    assert!(report.hints().is_empty());
}

#[test]
fn each_missing_required_line_is_reported_alone() {
    for code in [
        FieldCode::PropertyAddress,
        FieldCode::PostalCodeCity,
        FieldCode::AcquisitionDate,
        FieldCode::TotalArea,
    ] {
        let form = complete_form().with_null(code);

        let report = validate(&form, None);

        assert_eq!(report.critical().len(), 1, "only {code} should be missing");
        assert_eq!(report.critical()[0].field, Some(code));
        assert_eq!(report.status(), ValidationStatus::Invalid);
    }
}

#[test]
fn textual_zero_area_is_rejected() {
    let form = complete_form().with(FieldCode::TotalArea, "0");

    let report = validate(&form, None);

    assert!(finding_on(report.critical(), FieldCode::TotalArea).is_some());
}

#[test]
fn afa_within_ten_percent_is_accepted_at_the_boundary() {
    let property = building(2020);
    let form = complete_form().with(FieldCode::ReportedDepreciation, 3520.0);

    let report = validate(&form, Some(&property));

    assert!(report.critical().is_empty());
    assert_eq!(report.status(), ValidationStatus::Valid);
}

#[test]
fn afa_beyond_ten_percent_is_critical() {
    let property = building(2020);
    let form = complete_form().with(FieldCode::ReportedDepreciation, 3521.0);

    let report = validate(&form, Some(&property));

    let finding = finding_on(report.critical(), FieldCode::ReportedDepreciation)
        .expect("afa finding present");
    assert_eq!(finding.expected, Some(3200.0));
    assert_eq!(finding.actual, Some(3521.0));
    assert!(!report.can_submit());
}

#[test]
fn afa_too_low_is_critical_as_well() {
    let property = building(2020);
    let form = complete_form().with(FieldCode::ReportedDepreciation, 2000.0);

    let report = validate(&form, Some(&property));

    assert!(finding_on(report.critical(), FieldCode::ReportedDepreciation).is_some());
}

#[test]
fn historic_buildings_expect_two_and_a_half_percent() {
    let property = PropertyContext {
        acquisition_price: Some(100_000.0),
        ..building(1910)
    };
    let form = complete_form().with(FieldCode::ReportedDepreciation, 2500.0);

    let report = validate(&form, Some(&property));

    let finding = finding_on(report.critical(), FieldCode::ReportedDepreciation)
        .expect("afa finding present");
    assert_eq!(finding.expected, Some(2000.0));
}

#[test]
fn negative_afa_is_critical() {
    let property = building(2020);
    let form = complete_form().with(FieldCode::ReportedDepreciation, -3200.0);

    let report = validate(&form, Some(&property));

    assert_eq!(report.critical().len(), 1);
    let finding = &report.critical()[0];
    assert_eq!(finding.field, Some(FieldCode::ReportedDepreciation));
    assert_eq!(finding.expected, Some(3200.0));
    assert_eq!(finding.actual, Some(-3200.0));
    assert_eq!(report.status(), ValidationStatus::Invalid);
}

#[test]
fn zero_afa_is_not_checked() {
    let property = building(2020);
    let form = complete_form().with(FieldCode::ReportedDepreciation, 0.0);

    assert!(validate(&form, Some(&property)).critical().is_empty());
}

#[test]
fn afa_with_decimal_comma_is_checked() {
    let property = building(2020);
    let form = complete_form().with(FieldCode::ReportedDepreciation, "9.600,00");

    let report = validate(&form, Some(&property));

    let finding = finding_on(report.critical(), FieldCode::ReportedDepreciation)
        .expect("afa finding present");
    assert_eq!(finding.actual, Some(9600.0));
}

#[test]
fn afa_check_is_skipped_without_property_data() {
    let form = complete_form().with(FieldCode::ReportedDepreciation, 99_999.0);

    assert!(validate(&form, None).critical().is_empty());

    let without_price = PropertyContext {
        acquisition_price: None,
        ..building(2020)
    };
    assert!(validate(&form, Some(&without_price)).critical().is_empty());
}
