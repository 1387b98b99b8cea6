use anyhow::Context;
use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use roster_config::ObservabilityConfig;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// False until [`init_metrics`] has run with observability enabled.
pub fn is_observability_enabled() -> bool {
    OBSERVABILITY_ENABLED.get().copied().unwrap_or(false)
}

/// Installs the Prometheus recorder and its upkeep task.
///
/// Returns `None` when observability is disabled.
pub fn init_metrics(config: &ObservabilityConfig) -> anyhow::Result<Option<PrometheusHandle>> {
    let enabled = *OBSERVABILITY_ENABLED.get_or_init(|| config.enabled);
    if !enabled {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0,
            ],
        )
        .context("Failed to set buckets")?
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    // Unmatched requests share one label so arbitrary URLs cannot blow up cardinality.
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| {
            if uri_path.starts_with("/assets/") {
                "/assets".to_owned()
            } else {
                "unmatched".to_owned()
            }
        });

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for the metrics listener.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_student_created() {
    if !is_observability_enabled() {
        return;
    }
    counter!("students_created_total").increment(1);
}

pub fn track_student_updated() {
    if !is_observability_enabled() {
        return;
    }
    counter!("students_updated_total").increment(1);
}

pub fn track_student_deleted(removed: bool) {
    if !is_observability_enabled() {
        return;
    }
    let outcome = if removed { "removed" } else { "absent" };
    counter!("students_deleted_total", "outcome" => outcome).increment(1);
}

pub fn track_validation_failure() {
    if !is_observability_enabled() {
        return;
    }
    counter!("student_validation_failures_total").increment(1);
}

pub fn track_store_error(operation: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("student_store_errors_total", "operation" => operation).increment(1);
}
