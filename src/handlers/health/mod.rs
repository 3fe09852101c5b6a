pub mod analyze;
pub mod latest_metrics;
pub mod list_metrics;
pub mod record_metric;
pub mod recommendations;
pub mod sessions;
pub mod summary;
