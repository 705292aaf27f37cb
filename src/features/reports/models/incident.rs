use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Column list shared by every query that decodes an [`Incident`]
pub(crate) const INCIDENT_COLUMNS: &str = "id, report_number, reported_by, reporter_name, \
     reporter_contact, reporter_notes, severity, latitude, longitude, location_address, \
     barangay, municipality, province, landmark, image_url, sos_type, \
     emergency_contact_name, emergency_contact_number, created_at";

/// Incident severity enum matching the database enum
///
/// `minor`..`critical` are reporter-chosen for incident reports;
/// `emergency` is reserved for the SOS alert path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "incident_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum IncidentSeverity {
    Minor,
    Moderate,
    High,
    Critical,
    Emergency,
}

impl std::fmt::Display for IncidentSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentSeverity::Minor => write!(f, "minor"),
            IncidentSeverity::Moderate => write!(f, "moderate"),
            IncidentSeverity::High => write!(f, "high"),
            IncidentSeverity::Critical => write!(f, "critical"),
            IncidentSeverity::Emergency => write!(f, "emergency"),
        }
    }
}

/// Database model for an incident row
///
/// Both report submissions and SOS alerts land here; alerts carry
/// `sos_type = true`, a fixed `emergency` severity, and no images.
/// Rows are immutable after insert from this service's perspective.
#[derive(Debug, Clone, FromRow)]
pub struct Incident {
    pub id: Uuid,
    pub report_number: Option<String>,
    pub reported_by: Uuid,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub reporter_notes: Option<String>,
    pub severity: IncidentSeverity,
    pub latitude: f64,
    pub longitude: f64,
    pub location_address: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub landmark: Option<String>,
    pub image_url: Vec<String>,
    pub sos_type: bool,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a report row (built after the photo upload resolved)
#[derive(Debug)]
pub struct NewReport {
    pub report_number: String,
    pub reported_by: Uuid,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub reporter_notes: Option<String>,
    pub severity: IncidentSeverity,
    pub latitude: f64,
    pub longitude: f64,
    pub location_address: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub landmark: Option<String>,
    pub image_url: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&IncidentSeverity::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::to_string(&IncidentSeverity::Emergency).unwrap(),
            "\"emergency\""
        );
    }

    #[test]
    fn test_severity_deserializes_report_values() {
        for (raw, expected) in [
            ("\"minor\"", IncidentSeverity::Minor),
            ("\"moderate\"", IncidentSeverity::Moderate),
            ("\"high\"", IncidentSeverity::High),
            ("\"critical\"", IncidentSeverity::Critical),
        ] {
            let parsed: IncidentSeverity = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, expected);
        }
    }

    #[test]
    fn test_severity_display_matches_wire_format() {
        assert_eq!(IncidentSeverity::High.to_string(), "high");
        assert_eq!(IncidentSeverity::Emergency.to_string(), "emergency");
    }
}
