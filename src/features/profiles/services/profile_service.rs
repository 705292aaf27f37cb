use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::profiles::dtos::{
    extension_for_avatar_content_type, UpdateEmergencyContactDto, UpdateProfileDto,
};
use crate::features::profiles::models::{NewProfile, Profile};
use crate::modules::storage::ObjectStore;
use crate::shared::constants::AVATAR_PREFIX;

const PROFILE_COLUMNS: &str = "id, name, email, mobile_no, avatar_url, birth_date, \
     permanent_address, bio, emergency_contact_name, emergency_contact_number, \
     created_at, updated_at";

/// Service for profile operations
pub struct ProfileService {
    pool: PgPool,
    object_store: Arc<ObjectStore>,
}

impl ProfileService {
    pub fn new(pool: PgPool, object_store: Arc<ObjectStore>) -> Self {
        Self { pool, object_store }
    }

    /// Create the initial profile row at sign-up
    pub async fn create(&self, data: &NewProfile) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "INSERT INTO profiles (id, name, email, mobile_no) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.mobile_no)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.is_unique_violation() {
                    return AppError::Conflict("Profile already exists".to_string());
                }
            }
            tracing::error!("Failed to create profile: {:?}", e);
            AppError::Insert(e)
        })?;

        tracing::info!("Created profile: {}", profile.id);
        Ok(profile)
    }

    /// Get profile by id
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Profile>> {
        sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get profile: {:?}", e);
            AppError::Query(e)
        })
    }

    /// Get profile by id, NotFound if missing
    pub async fn get_required(&self, id: Uuid) -> Result<Profile> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))
    }

    /// Profile completion: update the personal fields that were supplied
    pub async fn update_profile(&self, id: Uuid, dto: &UpdateProfileDto) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE profiles SET \
                name = COALESCE($2, name), \
                mobile_no = COALESCE($3, mobile_no), \
                birth_date = COALESCE($4, birth_date), \
                permanent_address = COALESCE($5, permanent_address), \
                bio = COALESCE($6, bio), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.mobile_no)
        .bind(dto.birth_date)
        .bind(&dto.permanent_address)
        .bind(&dto.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update profile: {:?}", e);
            AppError::Insert(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

        tracing::info!("Updated profile: {}", id);
        Ok(profile)
    }

    /// Set the emergency contact used to prefill alert submissions
    pub async fn update_emergency_contact(
        &self,
        id: Uuid,
        dto: &UpdateEmergencyContactDto,
    ) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE profiles SET \
                emergency_contact_name = $2, \
                emergency_contact_number = $3, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.emergency_contact_name)
        .bind(&dto.emergency_contact_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update emergency contact: {:?}", e);
            AppError::Insert(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", id)))?;

        tracing::info!("Updated emergency contact for profile: {}", id);
        Ok(profile)
    }

    /// Upload a new avatar, replace the stored object, update avatar_url
    pub async fn update_avatar(
        &self,
        id: Uuid,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<Profile> {
        let current = self.get_required(id).await?;

        let extension = extension_for_avatar_content_type(content_type);
        let key = format!("{}/{}/{}.{}", AVATAR_PREFIX, id, Uuid::new_v4(), extension);

        self.object_store.upload(&key, data, content_type).await?;
        let url = self.object_store.public_url(&key);

        let updated = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE profiles SET avatar_url = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id)
        .bind(&url)
        .fetch_one(&self.pool)
        .await;

        let profile = match updated {
            Ok(profile) => profile,
            Err(e) => {
                // Compensate: the row was not updated, remove the new object
                if let Err(del_err) = self.object_store.delete(&key).await {
                    tracing::warn!(
                        "Failed to clean up avatar '{}' after update failure: {}",
                        key,
                        del_err
                    );
                }
                tracing::error!("Failed to update avatar_url: {:?}", e);
                return Err(AppError::Insert(e));
            }
        };

        // Best-effort cleanup of the replaced object
        if let Some(old_key) = current
            .avatar_url
            .as_deref()
            .and_then(|u| self.object_store.key_from_url(u))
        {
            if let Err(e) = self.object_store.delete(&old_key).await {
                tracing::warn!("Failed to delete replaced avatar '{}': {}", old_key, e);
            }
        }

        tracing::info!("Updated avatar for profile: {}", id);
        Ok(profile)
    }
}
