pub mod profile_handler;

pub use profile_handler::{
    __path_get_profile, __path_update_emergency_contact, __path_update_profile,
    __path_upload_avatar, get_profile, update_emergency_contact, update_profile, upload_avatar,
};
