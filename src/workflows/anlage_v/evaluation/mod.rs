mod config;
mod rules;

pub use config::PlausibilityConfig;

use super::form::FormSnapshot;
use super::market_rent::{FlatRateEstimator, MarketRentEstimator};
use super::property::PropertyContext;
use super::report::{FindingsBuilder, ValidationReport};
use chrono::{DateTime, Utc};
use rules::{CheckInput, CRITICAL_CHECKS, HINT_CHECKS, WARNING_CHECKS};
use std::sync::Arc;
use tracing::trace;

/// Stateless validator running the Anlage V rule battery against one snapshot.
///
/// Checks run in a fixed order (critical, then warnings, then hints) and every check sees the
/// same input, so two runs over the same snapshot produce identical findings.
#[derive(Clone)]
pub struct PlausibilityValidator {
    config: PlausibilityConfig,
    market_rent: Arc<dyn MarketRentEstimator>,
}

impl PlausibilityValidator {
    pub fn new(config: PlausibilityConfig) -> Self {
        Self::with_market_rent(config, Arc::new(FlatRateEstimator::default()))
    }

    pub fn with_market_rent(
        config: PlausibilityConfig,
        market_rent: Arc<dyn MarketRentEstimator>,
    ) -> Self {
        Self {
            config,
            market_rent,
        }
    }

    pub fn config(&self) -> &PlausibilityConfig {
        &self.config
    }

    pub fn validate(
        &self,
        form: &FormSnapshot,
        property: Option<&PropertyContext>,
    ) -> ValidationReport {
        self.validate_at(form, property, Utc::now())
    }

    pub fn validate_at(
        &self,
        form: &FormSnapshot,
        property: Option<&PropertyContext>,
        validated_at: DateTime<Utc>,
    ) -> ValidationReport {
        let input = CheckInput {
            form,
            property,
            config: &self.config,
            market_rent: self.market_rent.as_ref(),
        };

        let mut findings = FindingsBuilder::default();
        for check in CRITICAL_CHECKS
            .iter()
            .chain(WARNING_CHECKS)
            .chain(HINT_CHECKS)
        {
            if let Some(finding) = (check.run)(&input) {
                trace!(check = check.name, field = ?finding.field, "plausibility check fired");
                findings.push(finding);
            }
        }

        findings.finish(validated_at)
    }

    /// Names of the registered checks in evaluation order.
    pub fn check_names() -> Vec<&'static str> {
        CRITICAL_CHECKS
            .iter()
            .chain(WARNING_CHECKS)
            .chain(HINT_CHECKS)
            .map(|check| check.name)
            .collect()
    }
}

impl Default for PlausibilityValidator {
    fn default() -> Self {
        Self::new(PlausibilityConfig::default())
    }
}

impl std::fmt::Debug for PlausibilityValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlausibilityValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
