use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Anlage V line codes read by the plausibility checks.
///
/// The wire keys are shared with stored filings, so a variant's code must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldCode {
    #[serde(rename = "zeile_4")]
    PropertyAddress,
    #[serde(rename = "zeile_5")]
    PostalCodeCity,
    #[serde(rename = "zeile_7")]
    AcquisitionDate,
    #[serde(rename = "zeile_10")]
    TotalArea,
    #[serde(rename = "zeile_15")]
    ContractedRent,
    #[serde(rename = "zeile_16")]
    ActualRentReceived,
    #[serde(rename = "zeile_21")]
    BelowMarketRent,
    #[serde(rename = "zeile_32")]
    ReportedIncome,
    #[serde(rename = "zeile_33")]
    ReportedDepreciation,
    #[serde(rename = "zeile_37")]
    SpecialDepreciation,
    #[serde(rename = "zeile_40")]
    MaintenanceExpense,
    #[serde(rename = "zeile_41")]
    MaintenanceSpread,
    #[serde(rename = "zeile_47")]
    MortgageInterest,
    #[serde(rename = "zeile_75")]
    UtilityCosts,
    #[serde(rename = "zeile_82")]
    ReportedExpenses,
}

impl FieldCode {
    pub const fn code(self) -> &'static str {
        match self {
            Self::PropertyAddress => "zeile_4",
            Self::PostalCodeCity => "zeile_5",
            Self::AcquisitionDate => "zeile_7",
            Self::TotalArea => "zeile_10",
            Self::ContractedRent => "zeile_15",
            Self::ActualRentReceived => "zeile_16",
            Self::BelowMarketRent => "zeile_21",
            Self::ReportedIncome => "zeile_32",
            Self::ReportedDepreciation => "zeile_33",
            Self::SpecialDepreciation => "zeile_37",
            Self::MaintenanceExpense => "zeile_40",
            Self::MaintenanceSpread => "zeile_41",
            Self::MortgageInterest => "zeile_47",
            Self::UtilityCosts => "zeile_75",
            Self::ReportedExpenses => "zeile_82",
        }
    }

    /// Printed line number, used when findings refer the user to the form.
    pub const fn line(self) -> u8 {
        match self {
            Self::PropertyAddress => 4,
            Self::PostalCodeCity => 5,
            Self::AcquisitionDate => 7,
            Self::TotalArea => 10,
            Self::ContractedRent => 15,
            Self::ActualRentReceived => 16,
            Self::BelowMarketRent => 21,
            Self::ReportedIncome => 32,
            Self::ReportedDepreciation => 33,
            Self::SpecialDepreciation => 37,
            Self::MaintenanceExpense => 40,
            Self::MaintenanceSpread => 41,
            Self::MortgageInterest => 47,
            Self::UtilityCosts => 75,
            Self::ReportedExpenses => 82,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PropertyAddress => "Lage des Grundstücks (Straße, Hausnummer)",
            Self::PostalCodeCity => "Postleitzahl, Ort",
            Self::AcquisitionDate => "Anschaffung / Fertigstellung am",
            Self::TotalArea => "Gesamtwohnfläche",
            Self::ContractedRent => "Vereinbarte Miete",
            Self::ActualRentReceived => "Vereinnahmte Miete",
            Self::BelowMarketRent => "Miete bei verbilligter Überlassung",
            Self::ReportedIncome => "Summe der Einnahmen",
            Self::ReportedDepreciation => "AfA",
            Self::SpecialDepreciation => "Sonderabschreibung",
            Self::MaintenanceExpense => "Erhaltungsaufwendungen",
            Self::MaintenanceSpread => "Verteilte Erhaltungsaufwendungen",
            Self::MortgageInterest => "Schuldzinsen",
            Self::UtilityCosts => "Umlagefähige Nebenkosten",
            Self::ReportedExpenses => "Summe der Werbungskosten",
        }
    }
}

impl fmt::Display for FieldCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single form entry as submitted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Whether the entry counts as filled in: non-blank text, a non-zero number, or `true`.
    pub fn is_filled(&self) -> bool {
        match self {
            FieldValue::Number(value) => *value != 0.0 && !value.is_nan(),
            FieldValue::Flag(value) => *value,
            FieldValue::Text(value) => !value.trim().is_empty(),
        }
    }

    pub fn amount(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(value) => *value,
            FieldValue::Text(value) => parse_amount(value)?,
            FieldValue::Flag(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Accepts `1200.50` as well as the German `1.200,50` and `1200,50`.
fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.contains(',') {
        raw.replace('.', "").replacen(',', ".", 1).parse().ok()
    } else {
        raw.parse().ok()
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Flat mapping of line code to value, exactly as the client submitted it.
///
/// Codes outside [`FieldCode`] are kept so the snapshot round-trips, but no check reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    fields: BTreeMap<String, Option<FieldValue>>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: FieldCode, value: impl Into<FieldValue>) -> Self {
        self.set(code, value);
        self
    }

    /// Record an explicit `null` for the code.
    pub fn with_null(mut self, code: FieldCode) -> Self {
        self.fields.insert(code.code().to_string(), None);
        self
    }

    pub fn set(&mut self, code: FieldCode, value: impl Into<FieldValue>) {
        self.fields.insert(code.code().to_string(), Some(value.into()));
    }

    pub fn value(&self, code: FieldCode) -> Option<&FieldValue> {
        self.fields.get(code.code()).and_then(Option::as_ref)
    }

    pub fn is_filled(&self, code: FieldCode) -> bool {
        self.value(code).is_some_and(FieldValue::is_filled)
    }

    pub fn amount(&self, code: FieldCode) -> Option<f64> {
        self.value(code).and_then(FieldValue::amount)
    }

    pub fn amount_or_zero(&self, code: FieldCode) -> f64 {
        self.amount(code).unwrap_or(0.0)
    }

    pub fn positive_amount(&self, code: FieldCode) -> Option<f64> {
        self.amount(code).filter(|value| *value > 0.0)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_mixed_values_and_nulls() {
        let snapshot: FormSnapshot = serde_json::from_value(json!({
            "zeile_4": "Hauptstraße 1",
            "zeile_7": null,
            "zeile_10": 0,
            "zeile_32": "2000.50",
            "zeile_37": true,
            "zeile_999": "ignored"
        }))
        .expect("snapshot parses");

        assert!(snapshot.is_filled(FieldCode::PropertyAddress));
        assert!(snapshot.value(FieldCode::AcquisitionDate).is_none());
        assert!(!snapshot.is_filled(FieldCode::TotalArea));
        assert_eq!(snapshot.amount(FieldCode::TotalArea), Some(0.0));
        assert_eq!(snapshot.amount(FieldCode::ReportedIncome), Some(2000.5));
        assert!(snapshot.is_filled(FieldCode::SpecialDepreciation));
        assert_eq!(snapshot.len(), 6);
    }

    #[test]
    fn text_amounts_accept_a_decimal_comma() {
        let snapshot = FormSnapshot::new()
            .with(FieldCode::ReportedDepreciation, "3200,00")
            .with(FieldCode::ReportedIncome, " 12.480,50 ")
            .with(FieldCode::ReportedExpenses, "1.2,3,4");

        assert_eq!(snapshot.amount(FieldCode::ReportedDepreciation), Some(3200.0));
        assert_eq!(snapshot.amount(FieldCode::ReportedIncome), Some(12480.5));
        assert_eq!(snapshot.amount(FieldCode::ReportedExpenses), None);
    }

    #[test]
    fn blank_and_non_numeric_text_is_not_an_amount() {
        let snapshot = FormSnapshot::new()
            .with(FieldCode::ReportedExpenses, "  ")
            .with(FieldCode::ReportedIncome, "zweitausend");

        assert!(!snapshot.is_filled(FieldCode::ReportedExpenses));
        assert_eq!(snapshot.amount(FieldCode::ReportedExpenses), None);
        assert_eq!(snapshot.amount_or_zero(FieldCode::ReportedIncome), 0.0);
    }

    #[test]
    fn codes_serialize_as_line_keys() {
        let encoded = serde_json::to_value(FieldCode::MaintenanceSpread).expect("serializes");
        assert_eq!(encoded, json!("zeile_41"));
        assert_eq!(FieldCode::MaintenanceSpread.line(), 41);
    }
}
