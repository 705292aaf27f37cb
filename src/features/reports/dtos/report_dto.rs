use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::reports::models::{Incident, IncidentSeverity};

/// Request DTO for submitting an incident report
///
/// `photo` carries the capture as base64 (a `data:` URI prefix is accepted),
/// the way the camera flow encodes it for transport.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitReportDto {
    pub severity: IncidentSeverity,

    #[validate(length(max = 2000, message = "Notes are too long"))]
    pub reporter_notes: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    pub longitude: f64,

    #[validate(length(max = 500, message = "Address is too long"))]
    pub location_address: Option<String>,

    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub landmark: Option<String>,

    #[validate(length(min = 1, message = "Photo is required"))]
    pub photo: String,
}

/// Response DTO for an incident row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponseDto {
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

impl From<Incident> for ReportResponseDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            report_number: i.report_number,
            reported_by: i.reported_by,
            reporter_name: i.reporter_name,
            reporter_contact: i.reporter_contact,
            reporter_notes: i.reporter_notes,
            severity: i.severity,
            latitude: i.latitude,
            longitude: i.longitude,
            location_address: i.location_address,
            barangay: i.barangay,
            municipality: i.municipality,
            province: i.province,
            landmark: i.landmark,
            image_url: i.image_url,
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

    fn valid_dto() -> SubmitReportDto {
        SubmitReportDto {
            severity: IncidentSeverity::Moderate,
            reporter_notes: Some("Fallen tree blocking the road".to_string()),
            latitude: 8.632,
            longitude: 126.093,
            location_address: Some("Lianga, Surigao Del Sur".to_string()),
            barangay: None,
            municipality: Some("Lianga".to_string()),
            province: Some("Surigao Del Sur".to_string()),
            landmark: None,
            photo: "aGVsbG8=".to_string(),
        }
    }

    #[test]
    fn test_submit_report_dto_valid() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_submit_report_dto_requires_photo() {
        let mut dto = valid_dto();
        dto.photo = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_submit_report_dto_rejects_out_of_range_coordinates() {
        let mut dto = valid_dto();
        dto.latitude = 91.0;
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.longitude = -181.0;
        assert!(dto.validate().is_err());
    }
}
