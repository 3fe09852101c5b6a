use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use actix_cors::Cors;
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod db;
mod handlers;
mod middleware;
pub mod models;
mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use crate::config::jwt::JwtSettings;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:3001")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
