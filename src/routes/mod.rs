use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod health;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Health routes (require authentication)
    cfg.service(
        web::scope("/health")
            .wrap(AuthMiddleware)
            .service(health::latest_metrics)
            .service(health::metrics_range)
            .service(health::record_metric)
            .service(health::list_metrics)
            .service(health::summary)
            .service(health::recommendations)
            .service(health::record_session)
            .service(health::list_sessions)
            .service(health::session_by_date)
            .service(health::analyze_bp)
            .service(health::analyze_blood_sugar)
            .service(health::analyze_bmi),
    );
}
