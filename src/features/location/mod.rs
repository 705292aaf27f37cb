//! Current-location resolution.
//!
//! The device GPS sits behind the [`services::PositionSource`] seam; the
//! service runs permission -> fix -> reverse geocode and cleans the
//! formatted address. Nothing is cached: every call re-acquires.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::LocationService;
