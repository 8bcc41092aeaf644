use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static ASSETS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "asset_hub_assets_created_total",
        "Total assets created"
    )
    .expect("register assets_created_total")
});

pub static ASSETS_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "asset_hub_assets_deleted_total",
        "Total assets deleted"
    )
    .expect("register assets_deleted_total")
});

pub static REQUEST_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "asset_hub_request_errors_total",
        "Total asset requests answered with an error status",
        &["status"]
    )
    .expect("register request_errors_total")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_metrics_include_asset_counters() {
        ASSETS_CREATED_TOTAL.inc();
        REQUEST_ERRORS_TOTAL.with_label_values(&["404"]).inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("asset_hub_assets_created_total"));
        assert!(body.contains("asset_hub_request_errors_total{status=\"404\"}"));
    }
}
