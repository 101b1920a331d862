use super::property::PropertyContext;

/// Source of the local reference rent used by the two-thirds rule.
///
/// Implementations may consult a rent index; the validator only needs a monthly figure.
pub trait MarketRentEstimator: Send + Sync {
    /// Estimated monthly market rent for the whole property, if it can be determined.
    fn monthly_rent(&self, property: &PropertyContext) -> Option<f64>;
}

/// Flat rate per square metre of living area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRateEstimator {
    pub per_square_metre: f64,
}

impl FlatRateEstimator {
    pub const fn new(per_square_metre: f64) -> Self {
        Self { per_square_metre }
    }
}

impl Default for FlatRateEstimator {
    fn default() -> Self {
        Self::new(12.0)
    }
}

impl MarketRentEstimator for FlatRateEstimator {
    fn monthly_rent(&self, property: &PropertyContext) -> Option<f64> {
        property.living_area().map(|area| area * self.per_square_metre)
    }
}
