use std::collections::HashMap;
use std::str::FromStr;

use crate::models::health::{
    HealthMetric, HealthSummary, InvalidMetricType, LatestMetric, MetricTrend, MetricType,
};

/// Lookback window for trends and averages.
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Build the per-type map of most recent readings from the grouped
/// latest-per-type rows.
pub fn latest_metrics_map(
    rows: &[HealthMetric],
) -> Result<HashMap<MetricType, LatestMetric>, InvalidMetricType> {
    let mut latest = HashMap::new();
    for row in rows {
        let metric_type = MetricType::from_str(&row.metric_type)?;
        latest.insert(
            metric_type,
            LatestMetric {
                value: row.value,
                unit: row.unit.clone(),
                recorded_at: row.recorded_at,
                condition: row.condition.clone(),
            },
        );
    }
    Ok(latest)
}

/// Compose the summary from the latest-per-type rows and the rows inside the
/// trend window, the latter ordered by recorded_at descending.
///
/// For each type with at least two samples in the window the trend compares
/// the newest value against the oldest; change_percent is an unguarded
/// division and goes non-finite when the oldest value is zero (serde_json
/// then emits null for it).
pub fn build_summary(
    latest_rows: &[HealthMetric],
    window_rows: &[HealthMetric],
) -> Result<HealthSummary, InvalidMetricType> {
    let latest_metrics = latest_metrics_map(latest_rows)?;

    let mut trends = HashMap::new();
    let mut averages = HashMap::new();

    for metric_type in MetricType::ALL {
        let samples: Vec<&HealthMetric> = window_rows
            .iter()
            .filter(|m| m.metric_type == metric_type.as_str())
            .collect();

        if samples.len() > 1 {
            let current = samples[0].value;
            let previous = samples[samples.len() - 1].value;
            let change = current - previous;
            let change_percent = (change / previous) * 100.0;

            trends.insert(
                metric_type,
                MetricTrend {
                    current,
                    previous,
                    change,
                    change_percent,
                },
            );
        }

        if !samples.is_empty() {
            let sum: f64 = samples.iter().map(|m| m.value).sum();
            averages.insert(metric_type, sum / samples.len() as f64);
        }
    }

    Ok(HealthSummary {
        latest_metrics,
        trends,
        averages,
    })
}
