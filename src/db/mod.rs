pub mod health;
pub mod helpers;
pub mod users;
