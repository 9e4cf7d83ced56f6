use crate::metrics::{MetricName, Metrics};
use crate::report::format_metric;

/// Renders metrics as aligned `name: value` lines.
pub fn metrics_to_text(metrics: &Metrics) -> String {
    let width = MetricName::ALL.iter().map(|name| name.label().len()).max().unwrap_or(0) + 1;

    let mut out = String::new();
    for name in MetricName::ALL {
        let label = format!("{}:", name);
        out.push_str(&format!("{:<width$} {}\n", label, format_metric(metrics, name), width = width));
    }
    out
}
