use crate::Result;
use crate::metrics::Metrics;

/// Converts metrics to a JSON object keyed by report column names, in
/// report column order.
pub fn metrics_to_json(metrics: &Metrics, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(metrics)?) } else { Ok(serde_json::to_string(metrics)?) }
}
