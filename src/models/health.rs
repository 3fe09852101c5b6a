use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The eight supported measurement kinds. Stored as their wire names
/// (e.g. `BP_SYSTOLIC`) in the `metric_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
    BpSystolic,
    BpDiastolic,
    BloodSugar,
    Bmi,
    Weight,
    Height,
    Temperature,
    Pulse,
}

impl MetricType {
    pub const ALL: [MetricType; 8] = [
        MetricType::BpSystolic,
        MetricType::BpDiastolic,
        MetricType::BloodSugar,
        MetricType::Bmi,
        MetricType::Weight,
        MetricType::Height,
        MetricType::Temperature,
        MetricType::Pulse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::BpSystolic => "BP_SYSTOLIC",
            MetricType::BpDiastolic => "BP_DIASTOLIC",
            MetricType::BloodSugar => "BLOOD_SUGAR",
            MetricType::Bmi => "BMI",
            MetricType::Weight => "WEIGHT",
            MetricType::Height => "HEIGHT",
            MetricType::Temperature => "TEMPERATURE",
            MetricType::Pulse => "PULSE",
        }
    }

    /// Unit applied when the caller does not supply one.
    pub fn default_unit(&self) -> &'static str {
        match self {
            MetricType::BpSystolic | MetricType::BpDiastolic => "mmHg",
            MetricType::BloodSugar => "mg/dL",
            MetricType::Bmi => "kg/m²",
            MetricType::Weight => "kg",
            MetricType::Height => "cm",
            MetricType::Temperature => "°F",
            MetricType::Pulse => "bpm",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown metric type: {0}")]
pub struct InvalidMetricType(pub String);

impl FromStr for MetricType {
    type Err = InvalidMetricType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| InvalidMetricType(s.to_string()))
    }
}

/// Qualitative label derived from a raw numeric value at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Low,
    Normal,
    Elevated,
    High,
    Critical,
    Underweight,
    Overweight,
    Obese,
    Abnormal,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Low => "low",
            Condition::Normal => "normal",
            Condition::Elevated => "elevated",
            Condition::High => "high",
            Condition::Critical => "critical",
            Condition::Underweight => "underweight",
            Condition::Overweight => "overweight",
            Condition::Obese => "obese",
            Condition::Abnormal => "abnormal",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted measurement. Immutable after insert; `condition` is always
/// recomputed from `metric_type` + `value`, never taken from the caller.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub id: Uuid,
    pub user_id: Uuid,
    pub metric_type: String,
    pub value: f64,
    pub unit: String,
    pub notes: Option<String>,
    pub condition: String,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHealthMetricRequest {
    pub metric_type: MetricType,
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetricsFilter {
    #[serde(default)]
    pub metric_type: Option<MetricType>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct HealthMetricsPage {
    pub data: Vec<HealthMetric>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRangeFilter {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub metric_type: Option<MetricType>,
}

/// Most recent reading per metric type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestMetric {
    pub value: f64,
    pub unit: String,
    pub recorded_at: DateTime<Utc>,
    pub condition: String,
}

/// Newest-vs-oldest comparison inside the 30-day trend window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub latest_metrics: HashMap<MetricType, LatestMetric>,
    pub trends: HashMap<MetricType, MetricTrend>,
    pub averages: HashMap<MetricType, f64>,
}

/// Denormalized daily snapshot: one row per submission, all metric fields as
/// nullable columns. Repeated submissions for a date append rows.
#[derive(Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetricSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub bp_systolic: Option<f64>,
    pub bp_diastolic: Option<f64>,
    pub blood_sugar: Option<f64>,
    pub bmi: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub temperature: Option<f64>,
    pub pulse: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHealthSessionRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub bp_systolic: Option<f64>,
    #[serde(default)]
    pub bp_diastolic: Option<f64>,
    #[serde(default)]
    pub blood_sugar: Option<f64>,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub pulse: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SessionsQuery {
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct BloodPressureReading {
    pub systolic: f64,
    pub diastolic: f64,
}

#[derive(Debug, Deserialize)]
pub struct SingleReading {
    pub value: f64,
}

#[derive(Debug, Serialize)]
pub struct BloodPressureAnalysis {
    pub systolic: f64,
    pub diastolic: f64,
    pub condition: Condition,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct ReadingAnalysis {
    pub value: f64,
    pub unit: String,
    pub condition: Condition,
    pub recommendation: String,
}
