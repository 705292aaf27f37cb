pub mod location_handler;

pub use location_handler::{__path_resolve_location, resolve_location};
