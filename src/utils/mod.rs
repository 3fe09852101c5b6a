pub mod conditions;
pub mod password;
