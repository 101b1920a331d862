mod critical;
mod hints;
mod warnings;

use super::config::PlausibilityConfig;
use crate::workflows::anlage_v::form::FormSnapshot;
use crate::workflows::anlage_v::market_rent::MarketRentEstimator;
use crate::workflows::anlage_v::property::PropertyContext;
use crate::workflows::anlage_v::report::Finding;

/// Everything a rule may read. Rules never see each other's output.
pub(crate) struct CheckInput<'a> {
    pub form: &'a FormSnapshot,
    pub property: Option<&'a PropertyContext>,
    pub config: &'a PlausibilityConfig,
    pub market_rent: &'a dyn MarketRentEstimator,
}

pub(crate) struct RegisteredCheck {
    pub name: &'static str,
    pub run: fn(&CheckInput<'_>) -> Option<Finding>,
}

pub(crate) const CRITICAL_CHECKS: &[RegisteredCheck] = &[
    RegisteredCheck {
        name: "property_address",
        run: critical::property_address,
    },
    RegisteredCheck {
        name: "postal_code_city",
        run: critical::postal_code_city,
    },
    RegisteredCheck {
        name: "acquisition_date",
        run: critical::acquisition_date,
    },
    RegisteredCheck {
        name: "total_area",
        run: critical::total_area,
    },
    RegisteredCheck {
        name: "afa_plausibility",
        run: critical::afa_plausibility,
    },
];

pub(crate) const WARNING_CHECKS: &[RegisteredCheck] = &[
    RegisteredCheck {
        name: "expense_income_ratio",
        run: warnings::expense_income_ratio,
    },
    RegisteredCheck {
        name: "utility_share",
        run: warnings::utility_share,
    },
    RegisteredCheck {
        name: "rent_shortfall",
        run: warnings::rent_shortfall,
    },
    RegisteredCheck {
        name: "large_maintenance",
        run: warnings::large_maintenance,
    },
];

pub(crate) const HINT_CHECKS: &[RegisteredCheck] = &[
    RegisteredCheck {
        name: "accelerated_afa",
        run: hints::accelerated_afa,
    },
    RegisteredCheck {
        name: "special_depreciation",
        run: hints::special_depreciation,
    },
    RegisteredCheck {
        name: "below_market_rent",
        run: hints::below_market_rent,
    },
    RegisteredCheck {
        name: "interest_only",
        run: hints::interest_only,
    },
];

/// Round to cents so reported figures do not carry float noise.
pub(crate) fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
