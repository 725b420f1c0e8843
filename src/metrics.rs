use axum::{routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::time::Duration;

use crate::engine::Method;

// The recorder is process-global; install it at most once.
static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Clone)]
pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder (first call) and publish the history cap.
    pub fn init(history_cap: usize) -> anyhow::Result<Self> {
        let handle = HANDLE
            .get_or_try_init(|| {
                // Use default buckets to avoid API differences across crate versions.
                PrometheusBuilder::new().install_recorder()
            })
            .map_err(|e| anyhow::anyhow!("prometheus: install recorder: {e}"))?
            .clone();

        gauge!("analysis_history_cap").set(history_cap as f64);
        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}

pub fn record_analysis(method: Method, elapsed: Duration) {
    counter!("analysis_requests_total", "method" => method.as_str()).increment(1);
    histogram!("analysis_duration_ms").record(elapsed.as_secs_f64() * 1000.0);
}

pub fn record_rejected() {
    counter!("analysis_rejected_total").increment(1);
}
