use serde::{Deserialize, Serialize};

/// Thresholds behind the plausibility rules. Defaults are the values the filing UI ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibilityConfig {
    /// Allowed relative deviation between reported and expected AfA.
    pub afa_tolerance: f64,
    pub expense_income_multiplier: f64,
    /// Utility costs above this share of income are flagged.
    pub utility_share_limit: f64,
    pub rent_shortfall_tolerance: f64,
    pub maintenance_threshold: f64,
    /// Below this share of the market rent, deductions must be reduced.
    pub below_market_ratio: f64,
}

impl Default for PlausibilityConfig {
    fn default() -> Self {
        Self {
            afa_tolerance: 0.10,
            expense_income_multiplier: 3.0,
            utility_share_limit: 0.50,
            rent_shortfall_tolerance: 0.10,
            maintenance_threshold: 4000.0,
            below_market_ratio: 0.66,
        }
    }
}
