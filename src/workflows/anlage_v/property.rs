use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a building record in the external entity store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildingId(pub String);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a building is used. Unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UsageType {
    Residential,
    Commercial,
    Mixed,
    Other(String),
}

impl UsageType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "residential" | "wohnen" | "wohnung" | "wohngebaeude" | "wohngebäude" => {
                Self::Residential
            }
            "commercial" | "gewerbe" | "gewerblich" => Self::Commercial,
            "mixed" | "gemischt" => Self::Mixed,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Mixed => "mixed",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_residential(&self) -> bool {
        matches!(self, Self::Residential)
    }
}

impl From<String> for UsageType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<UsageType> for String {
    fn from(value: UsageType) -> Self {
        value.as_str().to_string()
    }
}

/// Building year from which the new-build AfA rate applies.
pub const NEW_BUILD_FROM_YEAR: i32 = 2023;
/// Buildings completed before this year depreciate at the historic rate.
pub const HISTORIC_BEFORE_YEAR: i32 = 1925;

/// Linear AfA rates in percent.
pub const HISTORIC_AFA_RATE: f64 = 2.5;
pub const NEW_BUILD_AFA_RATE: f64 = 3.0;
pub const STANDARD_AFA_RATE: f64 = 2.0;
/// Share of the purchase price attributed to the building rather than the land.
pub const BUILDING_SHARE: f64 = 0.8;

/// Property record a filing refers to. Missing attributes stay missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyContext {
    #[serde(default)]
    pub acquisition_price: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
    #[serde(default)]
    pub usage_type: Option<UsageType>,
    #[serde(default)]
    pub total_area: Option<f64>,
}

impl PropertyContext {
    /// Linear AfA rate in percent. An unknown build year gets the standard rate.
    pub fn afa_rate(&self) -> f64 {
        match self.year_built {
            Some(year) if year < HISTORIC_BEFORE_YEAR => HISTORIC_AFA_RATE,
            Some(year) if year >= NEW_BUILD_FROM_YEAR => NEW_BUILD_AFA_RATE,
            _ => STANDARD_AFA_RATE,
        }
    }

    pub fn depreciable_basis(&self) -> Option<f64> {
        self.acquisition_price
            .filter(|price| price.is_finite() && *price > 0.0)
            .map(|price| price * BUILDING_SHARE)
    }

    pub fn expected_afa(&self) -> Option<f64> {
        self.depreciable_basis().map(|basis| basis * (self.afa_rate() / 100.0))
    }

    pub fn is_new_build(&self) -> bool {
        self.year_built.is_some_and(|year| year >= NEW_BUILD_FROM_YEAR)
    }

    pub fn is_residential(&self) -> bool {
        self.usage_type.as_ref().is_some_and(UsageType::is_residential)
    }

    pub fn living_area(&self) -> Option<f64> {
        self.total_area
            .filter(|area| area.is_finite() && *area > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(year_built: Option<i32>) -> PropertyContext {
        PropertyContext {
            acquisition_price: Some(200_000.0),
            year_built,
            usage_type: Some(UsageType::Residential),
            total_area: Some(80.0),
        }
    }

    #[test]
    fn afa_rate_follows_build_year() {
        assert_eq!(building(Some(1900)).afa_rate(), 2.5);
        assert_eq!(building(Some(1925)).afa_rate(), 2.0);
        assert_eq!(building(Some(2022)).afa_rate(), 2.0);
        assert_eq!(building(Some(2023)).afa_rate(), 3.0);
        assert_eq!(building(None).afa_rate(), 2.0);
    }

    #[test]
    fn expected_afa_uses_building_share() {
        assert_eq!(building(Some(2020)).expected_afa(), Some(3200.0));

        let without_price = PropertyContext {
            acquisition_price: None,
            ..building(Some(2020))
        };
        assert_eq!(without_price.expected_afa(), None);
    }

    #[test]
    fn usage_type_accepts_german_labels() {
        assert_eq!(UsageType::parse(" Wohnen "), UsageType::Residential);
        assert_eq!(UsageType::parse("Gewerbe"), UsageType::Commercial);
        assert_eq!(
            UsageType::parse("Ferienwohnung"),
            UsageType::Other("Ferienwohnung".to_string())
        );

        let parsed: PropertyContext =
            serde_json::from_str(r#"{"year_built":2024,"usage_type":"wohngebäude"}"#)
                .expect("context parses");
        assert!(parsed.is_residential());
        assert!(parsed.is_new_build());
    }
}
