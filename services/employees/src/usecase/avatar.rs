use chrono::Utc;

use vet_domain::id::{EmployeeId, RecordId};

use crate::domain::repository::{AvatarRepository, ObjectStorage};
use crate::domain::types::{Avatar, AvatarPatch, Filter, UpsertOutcome};
use crate::error::EmployeesServiceError;

/// Uploaded image as read from the multipart body.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Object key of an employee's avatar: `{employee_id}/{basename}`.
pub fn avatar_key(employee_id: EmployeeId, filename: &str) -> String {
    let basename = filename
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
        .unwrap_or("avatar");
    format!("{employee_id}/{basename}")
}

fn check_upload(upload: &AvatarUpload, max_image_size: usize) -> Result<(), EmployeesServiceError> {
    if upload.data.is_empty() {
        return Err(EmployeesServiceError::MissingImage);
    }
    if upload.data.len() > max_image_size {
        return Err(EmployeesServiceError::ImageTooLarge {
            max: max_image_size,
        });
    }
    Ok(())
}

/// Delete an uploaded object whose document write failed, unless the stored
/// avatar still points at it.
async fn discard_upload<R: AvatarRepository, S: ObjectStorage>(
    repo: &R,
    storage: &S,
    employee_id: EmployeeId,
    key: &str,
) {
    match repo.get(&Filter::EmployeeId(employee_id)).await {
        Ok(Some(current)) if current.path == key => return,
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(key, error = %e, "cannot inspect avatar, keeping uploaded object");
            return;
        }
    }
    if let Err(e) = storage.delete(key).await {
        tracing::error!(key, error = %e, "failed to delete orphaned avatar object");
    }
}

// ── UpsertAvatar ─────────────────────────────────────────────────────────────

pub struct UpsertAvatarUseCase<R: AvatarRepository, S: ObjectStorage> {
    pub repo: R,
    pub storage: S,
    pub max_image_size: usize,
}

impl<R: AvatarRepository, S: ObjectStorage> UpsertAvatarUseCase<R, S> {
    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        upload: AvatarUpload,
    ) -> Result<(Avatar, UpsertOutcome), EmployeesServiceError> {
        check_upload(&upload, self.max_image_size)?;
        let key = avatar_key(employee_id, &upload.filename);
        self.storage
            .upload(&key, upload.content_type.as_deref(), upload.data)
            .await?;

        match self.write_document(employee_id, &key).await {
            Ok(written) => Ok(written),
            Err(e) => {
                discard_upload(&self.repo, &self.storage, employee_id, &key).await;
                Err(e)
            }
        }
    }

    async fn write_document(
        &self,
        employee_id: EmployeeId,
        key: &str,
    ) -> Result<(Avatar, UpsertOutcome), EmployeesServiceError> {
        let filter = Filter::EmployeeId(employee_id);
        let now = Utc::now();
        if self.repo.count_documents(&filter).await? == 0 {
            let avatar = Avatar {
                id: RecordId::generate(),
                employee_id,
                path: key.to_owned(),
                created_at: now,
                updated_at: now,
            };
            let created = self.repo.create(&avatar).await?;
            tracing::info!(employee_id = %employee_id, key, "avatar created");
            Ok((created, UpsertOutcome::Created))
        } else {
            let patch = AvatarPatch {
                path: key.to_owned(),
                updated_at: now,
            };
            let updated = self
                .repo
                .update(&filter, &patch)
                .await?
                .ok_or(EmployeesServiceError::AvatarNotFound)?;
            tracing::info!(employee_id = %employee_id, key, "avatar updated");
            Ok((updated, UpsertOutcome::Updated))
        }
    }
}

// ── ReplaceAvatar ────────────────────────────────────────────────────────────

/// Replace the file of an existing avatar. Never creates one.
pub struct ReplaceAvatarUseCase<R: AvatarRepository, S: ObjectStorage> {
    pub repo: R,
    pub storage: S,
    pub max_image_size: usize,
}

impl<R: AvatarRepository, S: ObjectStorage> ReplaceAvatarUseCase<R, S> {
    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        upload: AvatarUpload,
    ) -> Result<Avatar, EmployeesServiceError> {
        check_upload(&upload, self.max_image_size)?;
        let filter = Filter::EmployeeId(employee_id);
        if self.repo.count_documents(&filter).await? == 0 {
            return Err(EmployeesServiceError::AvatarNotFound);
        }

        let key = avatar_key(employee_id, &upload.filename);
        self.storage
            .upload(&key, upload.content_type.as_deref(), upload.data)
            .await?;

        let patch = AvatarPatch {
            path: key.clone(),
            updated_at: Utc::now(),
        };
        match self.repo.update(&filter, &patch).await {
            Ok(Some(avatar)) => Ok(avatar),
            Ok(None) => {
                discard_upload(&self.repo, &self.storage, employee_id, &key).await;
                Err(EmployeesServiceError::AvatarNotFound)
            }
            Err(e) => {
                discard_upload(&self.repo, &self.storage, employee_id, &key).await;
                Err(e)
            }
        }
    }
}

// ── GetAvatar ────────────────────────────────────────────────────────────────

pub struct GetAvatarUseCase<R: AvatarRepository> {
    pub repo: R,
}

impl<R: AvatarRepository> GetAvatarUseCase<R> {
    pub async fn execute(&self, employee_id: EmployeeId) -> Result<Avatar, EmployeesServiceError> {
        self.repo
            .get(&Filter::EmployeeId(employee_id))
            .await?
            .ok_or(EmployeesServiceError::AvatarNotFound)
    }
}

// ── DeleteAvatar ─────────────────────────────────────────────────────────────

pub struct DeleteAvatarUseCase<R: AvatarRepository, S: ObjectStorage> {
    pub repo: R,
    pub storage: S,
}

impl<R: AvatarRepository, S: ObjectStorage> DeleteAvatarUseCase<R, S> {
    pub async fn execute(&self, employee_id: EmployeeId) -> Result<(), EmployeesServiceError> {
        let filter = Filter::EmployeeId(employee_id);
        let avatar = self
            .repo
            .get(&filter)
            .await?
            .ok_or(EmployeesServiceError::AvatarNotFound)?;
        self.storage.delete(&avatar.path).await?;
        if !self.repo.delete(&filter).await? {
            return Err(EmployeesServiceError::AvatarNotFound);
        }
        Ok(())
    }
}
