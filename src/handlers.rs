pub mod auth;
pub mod dashboard;
pub mod families;
pub mod medications;
pub mod users;
