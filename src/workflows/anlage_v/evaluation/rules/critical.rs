use super::{cents, CheckInput};
use crate::workflows::anlage_v::form::{FieldCode, FormSnapshot};
use crate::workflows::anlage_v::report::Finding;

pub(super) fn property_address(input: &CheckInput<'_>) -> Option<Finding> {
    required(
        input.form,
        FieldCode::PropertyAddress,
        "Adresse des Objekts fehlt",
        "Straße und Hausnummer des vermieteten Objekts in Zeile 4 eintragen.",
    )
}

pub(super) fn postal_code_city(input: &CheckInput<'_>) -> Option<Finding> {
    required(
        input.form,
        FieldCode::PostalCodeCity,
        "Postleitzahl und Ort fehlen",
        "Postleitzahl und Ort des Objekts in Zeile 5 eintragen.",
    )
}

pub(super) fn acquisition_date(input: &CheckInput<'_>) -> Option<Finding> {
    required(
        input.form,
        FieldCode::AcquisitionDate,
        "Anschaffungs- bzw. Fertigstellungsdatum fehlt",
        "Datum laut Kaufvertrag oder Bauabnahme in Zeile 7 eintragen; es bestimmt Beginn und Satz der AfA.",
    )
}

/// A living area of zero is as unusable as a missing one.
pub(super) fn total_area(input: &CheckInput<'_>) -> Option<Finding> {
    let code = FieldCode::TotalArea;
    let missing = !input.form.is_filled(code) || input.form.amount(code) == Some(0.0);

    missing.then(|| {
        Finding::critical(code, "Gesamtwohnfläche fehlt oder ist 0")
            .fix("Wohnfläche in m² laut Mietvertrag oder Wohnflächenberechnung in Zeile 10 eintragen.")
    })
}

pub(super) fn afa_plausibility(input: &CheckInput<'_>) -> Option<Finding> {
    let code = FieldCode::ReportedDepreciation;
    let reported = input.form.amount(code).filter(|value| *value != 0.0)?;
    let property = input.property?;
    let expected = property.expected_afa()?;

    let deviation = (reported - expected).abs();
    if deviation <= expected * input.config.afa_tolerance {
        return None;
    }

    Some(
        Finding::critical(code, "AfA-Betrag weicht deutlich vom erwarteten Wert ab")
            .expected(cents(expected))
            .actual(reported)
            .detail(format!(
                "Erwartet: {:.2} EUR ({:.1} % auf 80 % des Kaufpreises), eingetragen: {:.2} EUR.",
                expected,
                property.afa_rate(),
                reported
            ))
            .fix("Bemessungsgrundlage (Gebäudeanteil) und AfA-Satz nach Baujahr prüfen."),
    )
}

fn required(form: &FormSnapshot, code: FieldCode, message: &str, fix: &str) -> Option<Finding> {
    (!form.is_filled(code)).then(|| Finding::critical(code, message).fix(fix))
}
