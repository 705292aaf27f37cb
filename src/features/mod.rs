pub mod alerts;
pub mod auth;
pub mod location;
pub mod profiles;
pub mod reports;
