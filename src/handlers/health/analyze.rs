use actix_web::{web, HttpResponse};

use crate::models::health::{
    BloodPressureAnalysis, BloodPressureReading, MetricType, ReadingAnalysis, SingleReading,
};
use crate::services::recommendations::{
    bmi_recommendation, blood_sugar_recommendation, bp_recommendation,
};
use crate::utils::conditions::{
    evaluate_blood_sugar_condition, evaluate_bmi_condition, evaluate_bp_condition,
};

#[tracing::instrument(name = "Analyze blood pressure", skip(reading))]
pub async fn analyze_bp(reading: web::Json<BloodPressureReading>) -> HttpResponse {
    let condition = evaluate_bp_condition(reading.systolic, reading.diastolic);
    HttpResponse::Ok().json(BloodPressureAnalysis {
        systolic: reading.systolic,
        diastolic: reading.diastolic,
        condition,
        recommendation: bp_recommendation(condition).to_string(),
    })
}

#[tracing::instrument(name = "Analyze blood sugar", skip(reading))]
pub async fn analyze_blood_sugar(reading: web::Json<SingleReading>) -> HttpResponse {
    let condition = evaluate_blood_sugar_condition(reading.value);
    HttpResponse::Ok().json(ReadingAnalysis {
        value: reading.value,
        unit: MetricType::BloodSugar.default_unit().to_string(),
        condition,
        recommendation: blood_sugar_recommendation(condition).to_string(),
    })
}

#[tracing::instrument(name = "Analyze BMI", skip(reading))]
pub async fn analyze_bmi(reading: web::Json<SingleReading>) -> HttpResponse {
    let condition = evaluate_bmi_condition(reading.value);
    HttpResponse::Ok().json(ReadingAnalysis {
        value: reading.value,
        unit: MetricType::Bmi.default_unit().to_string(),
        condition,
        recommendation: bmi_recommendation(condition).to_string(),
    })
}
