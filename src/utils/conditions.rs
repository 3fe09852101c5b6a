use crate::models::health::{Condition, MetricType};

/// Blood pressure banding over both readings; first match wins.
pub fn evaluate_bp_condition(systolic: f64, diastolic: f64) -> Condition {
    if systolic < 90.0 || diastolic < 60.0 {
        return Condition::Low;
    }
    if systolic < 120.0 && diastolic < 80.0 {
        return Condition::Normal;
    }
    if systolic < 130.0 && diastolic < 80.0 {
        return Condition::Elevated;
    }
    if systolic < 140.0 || diastolic < 90.0 {
        return Condition::High;
    }
    Condition::Critical
}

/// Fasting blood sugar bands in mg/dL.
pub fn evaluate_blood_sugar_condition(value: f64) -> Condition {
    if value < 70.0 {
        Condition::Low
    } else if value <= 100.0 {
        Condition::Normal
    } else if value <= 125.0 {
        Condition::Elevated
    } else if value <= 200.0 {
        Condition::High
    } else {
        Condition::Critical
    }
}

pub fn evaluate_bmi_condition(value: f64) -> Condition {
    if value < 18.5 {
        Condition::Underweight
    } else if value < 25.0 {
        Condition::Normal
    } else if value < 30.0 {
        Condition::Overweight
    } else {
        Condition::Obese
    }
}

/// Write-time dispatch used by the metric recorder. Systolic pressure alone
/// only supports a coarse three-band reading; diastolic, weight, height and
/// pulse have no banding and always come back normal.
pub fn evaluate_condition(metric_type: MetricType, value: f64) -> Condition {
    match metric_type {
        MetricType::BpSystolic => {
            if value < 120.0 {
                Condition::Normal
            } else if value < 130.0 {
                Condition::Elevated
            } else {
                Condition::High
            }
        }
        MetricType::BloodSugar => evaluate_blood_sugar_condition(value),
        MetricType::Bmi => evaluate_bmi_condition(value),
        MetricType::Temperature => {
            if (98.6..=99.5).contains(&value) {
                Condition::Normal
            } else {
                Condition::Abnormal
            }
        }
        _ => Condition::Normal,
    }
}
