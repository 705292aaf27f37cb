mod profile_dto;

pub use profile_dto::{
    extension_for_avatar_content_type, is_avatar_content_type_allowed, ProfileResponseDto,
    UpdateEmergencyContactDto, UpdateProfileDto, ALLOWED_AVATAR_MIME_TYPES, MAX_AVATAR_SIZE,
};
