mod incident;

pub(crate) use incident::INCIDENT_COLUMNS;
pub use incident::{Incident, IncidentSeverity, NewReport};
