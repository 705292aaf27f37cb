use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a citizen profile
///
/// Created at sign-up with the basics; the optional columns are filled in by
/// the profile-completion flow. Never deleted by this service.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile_no: String,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub permanent_address: Option<String>,
    pub bio: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a profile at sign-up
#[derive(Debug)]
pub struct NewProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile_no: String,
}
