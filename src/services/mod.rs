pub mod health_summary;
pub mod recommendations;
