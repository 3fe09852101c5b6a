use crate::models::health::{Condition, HealthSummary, MetricType};
use crate::utils::conditions::{
    evaluate_blood_sugar_condition, evaluate_bmi_condition, evaluate_bp_condition,
};

/// Canned guidance derived from the latest readings. Conditions are
/// re-evaluated from the bare values here; the stored condition labels are
/// write-time three-band shorthands and too coarse for this purpose.
pub fn health_recommendations(summary: &HealthSummary) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(systolic) = summary.latest_metrics.get(&MetricType::BpSystolic) {
        // Without a diastolic reading none of the band rules can match, so a
        // lone systolic value is reported as critical.
        let bp_condition = match summary.latest_metrics.get(&MetricType::BpDiastolic) {
            Some(diastolic) => evaluate_bp_condition(systolic.value, diastolic.value),
            None => Condition::Critical,
        };
        match bp_condition {
            Condition::High => recommendations.push(
                "Your blood pressure is elevated. Reduce salt intake and increase physical activity."
                    .to_string(),
            ),
            Condition::Critical => recommendations.push(
                "Your blood pressure is critically high. Please consult a doctor immediately."
                    .to_string(),
            ),
            _ => {}
        }
    }

    if let Some(blood_sugar) = summary.latest_metrics.get(&MetricType::BloodSugar) {
        match evaluate_blood_sugar_condition(blood_sugar.value) {
            Condition::High => recommendations.push(
                "Your blood sugar levels are elevated. Monitor your diet and consult a healthcare provider."
                    .to_string(),
            ),
            Condition::Low => recommendations.push(
                "Your blood sugar levels are low. Consider eating a balanced meal with carbohydrates."
                    .to_string(),
            ),
            _ => {}
        }
    }

    if let Some(bmi) = summary.latest_metrics.get(&MetricType::Bmi) {
        match evaluate_bmi_condition(bmi.value) {
            Condition::Overweight | Condition::Obese => recommendations.push(
                "Maintain a healthy diet and regular exercise. Consider consulting a nutritionist."
                    .to_string(),
            ),
            _ => {}
        }
    }

    if recommendations.is_empty() {
        recommendations
            .push("Keep up the good work! Continue monitoring your health regularly.".to_string());
    }

    recommendations
}

pub fn bp_recommendation(condition: Condition) -> &'static str {
    match condition {
        Condition::Normal => "Your blood pressure is healthy. Maintain your current lifestyle.",
        Condition::Elevated => {
            "Your blood pressure is slightly elevated. Reduce stress and exercise regularly."
        }
        Condition::High => "Your blood pressure is elevated. Consult a doctor and reduce salt intake.",
        Condition::Critical => "Your blood pressure is critically high. Seek medical help immediately.",
        _ => "Monitor your blood pressure regularly.",
    }
}

pub fn blood_sugar_recommendation(condition: Condition) -> &'static str {
    match condition {
        Condition::Normal => "Your blood sugar level is healthy.",
        Condition::Elevated => "Your blood sugar is slightly elevated. Monitor your diet.",
        Condition::High => {
            "Your blood sugar is high. Consult a healthcare provider and adjust your diet."
        }
        Condition::Critical => "Your blood sugar is critically high. Seek medical help immediately.",
        Condition::Low => "Your blood sugar is low. Consume a balanced meal with carbohydrates.",
        _ => "Monitor your blood sugar regularly.",
    }
}

pub fn bmi_recommendation(condition: Condition) -> &'static str {
    match condition {
        Condition::Normal => "Your BMI is in the healthy range.",
        Condition::Underweight => {
            "You are underweight. Ensure a balanced diet with adequate calories."
        }
        Condition::Overweight => "You are overweight. Exercise regularly and maintain a balanced diet.",
        Condition::Obese => {
            "You are obese. Consult a nutritionist and physician for a weight management plan."
        }
        _ => "Maintain a healthy lifestyle.",
    }
}
