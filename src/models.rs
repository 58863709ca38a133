pub mod auth;
pub mod dashboard;
pub mod family;
pub mod medication;
pub mod tenancy;
