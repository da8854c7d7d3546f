use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use ziyarat_config::parse_bool;
use ziyarat_models::{PermissionAction, find_module};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or(true)
    })
}

/// Initialize Prometheus metrics exporter with upkeep task
/// Returns None if observability is disabled
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
            ],
        )?
        .install_recorder()?;

    // Spawn upkeep task to clean stale metrics
    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Route template for the `path` label. Requests that matched no route share
/// one label so arbitrary 404 paths cannot grow the series count.
fn path_label(matched: Option<&str>) -> String {
    matched.unwrap_or("unmatched").to_owned()
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = path_label(req.extensions().get::<MatchedPath>().map(MatchedPath::as_str));

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router for metrics server
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

/// Record a permission decision.
///
/// Module and action labels come from request input, so anything outside
/// the registry or the action set is reported as `unknown` to keep label
/// cardinality bounded.
pub fn track_permission_check(module: &str, action: &str, allowed: bool) {
    if !is_observability_enabled() {
        return;
    }

    let module = find_module(module).map_or("unknown", |m| m.id);
    let action = action
        .parse::<PermissionAction>()
        .map_or("unknown", |a| a.as_str());
    let outcome = if allowed { "allowed" } else { "denied" };

    counter!(
        "permission_checks_total",
        "module" => module,
        "action" => action,
        "outcome" => outcome
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_label_uses_route_template() {
        assert_eq!(path_label(Some("/api/modules/{id}")), "/api/modules/{id}");
    }

    #[test]
    fn test_path_label_collapses_unmatched_requests() {
        assert_eq!(path_label(None), "unmatched");
    }
}
