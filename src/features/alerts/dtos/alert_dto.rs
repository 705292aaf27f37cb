use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Incident, IncidentSeverity};
use crate::shared::validation::MOBILE_NO_REGEX;

/// Request DTO for an SOS emergency alert
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitAlertDto {
    #[validate(length(min = 1, max = 2000, message = "Details are required"))]
    pub details: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    pub longitude: f64,

    #[validate(length(min = 1, max = 500, message = "Location is required"))]
    pub location_address: String,

    #[validate(length(min = 1, max = 120, message = "Emergency contact name is required"))]
    pub emergency_contact_name: String,

    #[validate(regex(path = *MOBILE_NO_REGEX, message = "Invalid emergency contact number"))]
    pub emergency_contact_number: String,
}

/// Response DTO for a created alert
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertResponseDto {
    pub id: Uuid,
    pub reported_by: Uuid,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub details: Option<String>,
    pub severity: IncidentSeverity,
    pub latitude: f64,
    pub longitude: f64,
    pub location_address: Option<String>,
    pub sos_type: bool,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Incident> for AlertResponseDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            reported_by: i.reported_by,
            reporter_name: i.reporter_name,
            reporter_contact: i.reporter_contact,
            details: i.reporter_notes,
            severity: i.severity,
            latitude: i.latitude,
            longitude: i.longitude,
            location_address: i.location_address,
            sos_type: i.sos_type,
            emergency_contact_name: i.emergency_contact_name,
            emergency_contact_number: i.emergency_contact_number,
            created_at: i.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_alert_dto_requires_contact() {
        let dto = SubmitAlertDto {
            details: "Trapped by flood water".to_string(),
            latitude: 8.632,
            longitude: 126.093,
            location_address: "Lianga, Surigao Del Sur".to_string(),
            emergency_contact_name: "".to_string(),
            emergency_contact_number: "09171234567".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
