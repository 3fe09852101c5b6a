pub mod auth_handler;
pub mod backend_health_handler;
pub mod health;
pub mod registration_handler;
