use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{Incident, IncidentSeverity, INCIDENT_COLUMNS};

/// Input for an SOS alert submission
#[derive(Debug)]
pub struct SubmitAlert {
    pub reporter_id: Uuid,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub details: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location_address: String,
    pub emergency_contact_name: String,
    pub emergency_contact_number: String,
}

/// Data for inserting an alert row; severity and the SOS flag are fixed
#[derive(Debug)]
struct NewAlert {
    reported_by: Uuid,
    reporter_name: String,
    reporter_contact: String,
    details: String,
    severity: IncidentSeverity,
    latitude: f64,
    longitude: f64,
    location_address: String,
    sos_type: bool,
    emergency_contact_name: String,
    emergency_contact_number: String,
}

impl NewAlert {
    fn from_submission(input: SubmitAlert) -> Self {
        Self {
            reported_by: input.reporter_id,
            reporter_name: input.reporter_name,
            reporter_contact: input.reporter_contact,
            details: input.details,
            severity: IncidentSeverity::Emergency,
            latitude: input.latitude,
            longitude: input.longitude,
            location_address: input.location_address,
            sos_type: true,
            emergency_contact_name: input.emergency_contact_name,
            emergency_contact_number: input.emergency_contact_number,
        }
    }
}

/// Service for SOS emergency alert submission
pub struct AlertService {
    pool: PgPool,
}

impl AlertService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submit an emergency alert: one row, no photo, no upload step.
    ///
    /// Not idempotent: repeated calls create independent rows.
    pub async fn submit(&self, input: SubmitAlert) -> Result<Incident> {
        let alert = NewAlert::from_submission(input);

        let incident = sqlx::query_as::<_, Incident>(&format!(
            "INSERT INTO incidents (reported_by, reporter_name, reporter_contact, \
                reporter_notes, severity, latitude, longitude, location_address, \
                sos_type, emergency_contact_name, emergency_contact_number) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {INCIDENT_COLUMNS}"
        ))
        .bind(alert.reported_by)
        .bind(&alert.reporter_name)
        .bind(&alert.reporter_contact)
        .bind(&alert.details)
        .bind(alert.severity)
        .bind(alert.latitude)
        .bind(alert.longitude)
        .bind(&alert.location_address)
        .bind(alert.sos_type)
        .bind(&alert.emergency_contact_name)
        .bind(&alert.emergency_contact_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert alert: {:?}", e);
            AppError::Insert(e)
        })?;

        tracing::info!(
            "Created emergency alert {} for reporter {}",
            incident.id,
            incident.reported_by
        );

        Ok(incident)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_row_is_fixed_to_sos_emergency() {
        let alert = NewAlert::from_submission(SubmitAlert {
            reporter_id: Uuid::parse_str("7e0b6b5e-9f3a-4a1c-8a6a-111111111111").unwrap(),
            reporter_name: "Juan Dela Cruz".to_string(),
            reporter_contact: "09171234567".to_string(),
            details: "Trapped by flood water".to_string(),
            latitude: 8.632,
            longitude: 126.093,
            location_address: "Lianga, Surigao Del Sur".to_string(),
            emergency_contact_name: "Jane Doe".to_string(),
            emergency_contact_number: "09998887777".to_string(),
        });

        assert!(alert.sos_type);
        assert_eq!(alert.severity, IncidentSeverity::Emergency);
        assert_eq!(alert.emergency_contact_name, "Jane Doe");
        assert_eq!(alert.details, "Trapped by flood water");
    }
}
