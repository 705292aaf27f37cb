/// Default page size for report pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// OBJECT STORAGE
// =============================================================================

/// Storage prefix for incident report photos
pub const INCIDENT_IMAGE_PREFIX: &str = "incidents";

/// Storage prefix for profile avatars
pub const AVATAR_PREFIX: &str = "avatars";

/// Capture format for incident photos (the camera flow always produces JPEG)
pub const INCIDENT_IMAGE_EXTENSION: &str = "jpg";

/// MIME type for incident photos
pub const INCIDENT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";
