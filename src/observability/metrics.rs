//! Metrics recording functions.
//!
//! Counters and histograms go through the `metrics` facade. Nothing is
//! exported unless the embedding application installs a recorder.

use std::time::Duration;

/// Record one shopping-list build
pub fn record_shopping_list_metrics(
    lines: usize,
    items: usize,
    unmerged_groups: usize,
    duration: Duration,
) {
    metrics::counter!("shopping_list_builds_total").increment(1);
    metrics::counter!("ingredient_lines_parsed_total").increment(lines as u64);
    metrics::counter!("shopping_list_unmerged_groups_total").increment(unmerged_groups as u64);
    metrics::histogram!("shopping_list_items").record(items as f64);
    metrics::histogram!("shopping_list_build_duration_seconds").record(duration.as_secs_f64());
}

/// Record errors from the outer surfaces (config, recipe loading, CLI)
pub fn record_error_metrics(error_type: &str, component: &str) {
    let error_type = error_type.to_string();
    let component = component.to_string();
    metrics::counter!("errors_total", "type" => error_type, "component" => component).increment(1);
}
