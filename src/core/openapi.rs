use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::alerts::{dtos as alerts_dtos, handlers as alerts_handlers};
use crate::features::auth;
use crate::features::location::{dtos as location_dtos, handlers as location_handlers};
use crate::features::profiles::{dtos as profiles_dtos, handlers as profiles_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::shared::types::{ApiResponse, Meta, PageMeta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::login_with_google,
        auth::handlers::get_me,
        auth::handlers::logout,
        // Profiles
        profiles_handlers::get_profile,
        profiles_handlers::update_profile,
        profiles_handlers::update_emergency_contact,
        profiles_handlers::upload_avatar,
        // Reports
        reports_handlers::submit_report,
        reports_handlers::list_reports,
        reports_handlers::get_report,
        // Alerts
        alerts_handlers::submit_alert,
        // Location
        location_handlers::resolve_location,
    ),
    components(
        schemas(
            // Shared
            Meta,
            PageMeta,
            // Auth
            auth::model::AuthenticatedUser,
            auth::dtos::RegisterRequestDto,
            auth::dtos::LoginRequestDto,
            auth::dtos::GoogleSignInRequestDto,
            auth::dtos::AuthResponseDto,
            auth::dtos::AuthUserDto,
            auth::dtos::MeResponseDto,
            auth::dtos::SignOutResponseDto,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::dtos::MeResponseDto>,
            ApiResponse<auth::dtos::SignOutResponseDto>,
            // Profiles
            profiles_dtos::ProfileResponseDto,
            profiles_dtos::UpdateProfileDto,
            profiles_dtos::UpdateEmergencyContactDto,
            ApiResponse<profiles_dtos::ProfileResponseDto>,
            // Reports
            reports_models::IncidentSeverity,
            reports_dtos::SubmitReportDto,
            reports_dtos::ReportResponseDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            // Alerts
            alerts_dtos::SubmitAlertDto,
            alerts_dtos::AlertResponseDto,
            ApiResponse<alerts_dtos::AlertResponseDto>,
            // Location
            location_dtos::ResolveLocationDto,
            location_dtos::UserLocationDto,
            location_dtos::AddressComponentsDto,
            ApiResponse<location_dtos::UserLocationDto>,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "profiles", description = "Citizen profile management"),
        (name = "reports", description = "Incident report submission and retrieval"),
        (name = "alerts", description = "SOS emergency alerts"),
        (name = "location", description = "Current-location resolution"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Bantay API",
        version = "0.1.0",
        description = "Citizen incident reporting and emergency alerting API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
