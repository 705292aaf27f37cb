//! Citizen profile management.
//!
//! Profiles are created at sign-up and completed later (birth date, address,
//! bio, emergency contact, avatar). The emergency contact feeds the alert
//! submission prefill.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ProfileService;
