//! Incident report submission and retrieval.
//!
//! The submission pipeline runs photo decode -> storage upload -> public URL
//! -> row insert, compensating with an object delete when the insert fails.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ReportService;
