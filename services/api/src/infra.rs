use metrics_exporter_prometheus::PrometheusHandle;
use propertax::workflows::anlage_v::{BuildingCatalog, PlausibilityService, PlausibilityValidator};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn plausibility_service(
    catalog: BuildingCatalog,
) -> PlausibilityService<BuildingCatalog> {
    PlausibilityService::new(Arc::new(catalog), PlausibilityValidator::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use propertax::workflows::anlage_v::PlausibilityConfig;

    #[test]
    fn service_uses_baseline_thresholds() {
        let service = plausibility_service(BuildingCatalog::default());

        assert_eq!(service.validator().config(), &PlausibilityConfig::default());
    }
}
