use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::location::services::{AddressComponents, UserLocation};

/// Request DTO carrying the device's GPS fix
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ResolveLocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude out of range"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude out of range"))]
    pub longitude: f64,
}

/// Response DTO for a resolved location
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserLocationDto {
    pub latitude: f64,
    pub longitude: f64,
    pub full_address: String,
    pub address: AddressComponentsDto,
}

/// Raw address components from the geocoder
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressComponentsDto {
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country_code: Option<String>,
}

impl From<AddressComponents> for AddressComponentsDto {
    fn from(a: AddressComponents) -> Self {
        Self {
            road: a.road,
            neighbourhood: a.neighbourhood,
            suburb: a.suburb,
            city: a.city,
            state: a.state,
            postcode: a.postcode,
            country_code: a.country_code,
        }
    }
}

impl From<UserLocation> for UserLocationDto {
    fn from(l: UserLocation) -> Self {
        Self {
            latitude: l.latitude,
            longitude: l.longitude,
            full_address: l.full_address,
            address: l.address.into(),
        }
    }
}
