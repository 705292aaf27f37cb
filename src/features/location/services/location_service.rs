use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::GeocoderConfig;
use crate::core::error::{AppError, Result};

/// Outcome of a location permission request on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// A raw GPS fix
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// The device GPS collaborator.
///
/// Permission is requested before every fix; a denial short-circuits the
/// pipeline without touching the GPS or the geocoder.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn request_permission(&self) -> Result<PermissionStatus>;
    async fn current_position(&self) -> Result<Position>;
}

/// Production source: the device already holds the fix and forwards it with
/// the request, so permission is implicitly granted.
pub struct ReportedPosition {
    position: Position,
}

impl ReportedPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Position {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl PositionSource for ReportedPosition {
    async fn request_permission(&self) -> Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }

    async fn current_position(&self) -> Result<Position> {
        Ok(self.position)
    }
}

/// A resolved current location: coordinates plus the cleaned formatted
/// address and its raw components. Recomputed on every call, never cached.
#[derive(Debug, Clone)]
pub struct UserLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub full_address: String,
    pub address: AddressComponents,
}

#[derive(Debug, Clone, Default)]
pub struct AddressComponents {
    pub road: Option<String>,
    pub neighbourhood: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country_code: Option<String>,
}

/// Nominatim reverse geocoding response
#[derive(Debug, Deserialize)]
struct NominatimReverseResponse {
    display_name: String,
    address: Option<NominatimAddress>,
}

/// Nominatim address components
#[derive(Debug, Deserialize)]
struct NominatimAddress {
    road: Option<String>,
    neighbourhood: Option<String>,
    suburb: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    postcode: Option<String>,
    country_code: Option<String>,
}

impl NominatimAddress {
    /// Get city, falling back to town or village
    fn get_city(&self) -> Option<String> {
        self.city
            .clone()
            .or_else(|| self.town.clone())
            .or_else(|| self.village.clone())
    }
}

/// Service resolving the device's current location to a readable address
pub struct LocationService {
    client: reqwest::Client,
    base_url: String,
}

impl LocationService {
    pub fn new(config: &GeocoderConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .build()
                .expect("Failed to build HTTP client"),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the current location through the full pipeline:
    /// permission -> fix -> reverse geocode -> locality-prefix strip.
    pub async fn current_location(&self, source: &dyn PositionSource) -> Result<UserLocation> {
        match source.request_permission().await? {
            PermissionStatus::Granted => {}
            PermissionStatus::Denied => {
                return Err(AppError::PermissionDenied(
                    "Location permission denied".to_string(),
                ));
            }
        }

        let position = source.current_position().await?;
        self.reverse_geocode(position.latitude, position.longitude)
            .await
    }

    /// Reverse geocode a coordinate pair via Nominatim
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> Result<UserLocation> {
        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&addressdetails=1",
            self.base_url, latitude, longitude
        );

        tracing::debug!("Reverse geocoding: {},{} -> {}", latitude, longitude, url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Nominatim request failed: {:?}", e);
            AppError::LocationUnavailable(format!("Reverse geocoding failed: {}", e))
        })?;

        if !response.status().is_success() {
            tracing::warn!("Nominatim returned status: {}", response.status());
            return Err(AppError::LocationUnavailable(format!(
                "Reverse geocoding failed: HTTP {}",
                response.status()
            )));
        }

        let result: NominatimReverseResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Nominatim response: {:?}", e);
            AppError::LocationUnavailable(format!("Failed to parse geocoder response: {}", e))
        })?;

        let address = result
            .address
            .map(|a| AddressComponents {
                road: a.road.clone(),
                neighbourhood: a.neighbourhood.clone(),
                suburb: a.suburb.clone(),
                city: a.get_city(),
                state: a.state.clone(),
                postcode: a.postcode.clone(),
                country_code: a.country_code.clone(),
            })
            .unwrap_or_default();

        Ok(UserLocation {
            latitude,
            longitude,
            full_address: strip_locality_prefix(&result.display_name),
            address,
        })
    }
}

/// Drop the first comma-delimited segment of a formatted address (a
/// non-essential locality prefix such as a house name or plus code),
/// keeping the raw address when nothing else remains.
fn strip_locality_prefix(raw: &str) -> String {
    let cleaned = raw
        .split(',')
        .skip(1)
        .collect::<Vec<_>>()
        .join(",")
        .trim()
        .to_string();

    if cleaned.is_empty() {
        raw.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct DenyingSource {
        fix_requested: AtomicBool,
    }

    #[async_trait]
    impl PositionSource for DenyingSource {
        async fn request_permission(&self) -> Result<PermissionStatus> {
            Ok(PermissionStatus::Denied)
        }

        async fn current_position(&self) -> Result<Position> {
            self.fix_requested.store(true, Ordering::SeqCst);
            Ok(Position {
                latitude: 0.0,
                longitude: 0.0,
            })
        }
    }

    fn service() -> LocationService {
        LocationService::new(&GeocoderConfig {
            // Unroutable: the denied-permission path must never reach it
            base_url: "http://127.0.0.1:1".to_string(),
            user_agent: "BantayCore/1.0 (test)".to_string(),
        })
    }

    #[tokio::test]
    async fn test_denied_permission_skips_the_fix_and_geocode() {
        let source = DenyingSource {
            fix_requested: AtomicBool::new(false),
        };

        let result = service().current_location(&source).await;

        assert!(matches!(result, Err(AppError::PermissionDenied(_))));
        assert!(!source.fix_requested.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_reported_position_is_granted_and_returns_fix() {
        let source = ReportedPosition::new(8.632, 126.093);
        assert_eq!(
            source.request_permission().await.unwrap(),
            PermissionStatus::Granted
        );
        let fix = source.current_position().await.unwrap();
        assert_eq!(fix.latitude, 8.632);
        assert_eq!(fix.longitude, 126.093);
    }

    #[test]
    fn test_strip_locality_prefix_drops_first_segment() {
        assert_eq!(
            strip_locality_prefix("Purok 2, Poblacion, Lianga, Surigao Del Sur, Philippines"),
            "Poblacion, Lianga, Surigao Del Sur, Philippines"
        );
    }

    #[test]
    fn test_strip_locality_prefix_falls_back_when_single_segment() {
        assert_eq!(strip_locality_prefix("Lianga"), "Lianga");
    }

    #[test]
    fn test_strip_locality_prefix_trims_whitespace() {
        assert_eq!(strip_locality_prefix("X,  Main St, Town"), "Main St, Town");
    }
}
