use chrono::Utc;
use validator::Validate;

use vet_domain::id::{EmployeeId, RecordId};
use vet_domain::pagination::{Pager, PagerResult};
use vet_domain::profile::{EmployeeRole, Gender};

use crate::domain::repository::{ProfileEventPublisher, ProfileRepository};
use crate::domain::types::{Filter, Profile, ProfilePatch, ProfileUpdateMessage, non_blank};
use crate::error::EmployeesServiceError;

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, employee_id: EmployeeId) -> Result<Profile, EmployeesServiceError> {
        self.repo
            .get(&Filter::EmployeeId(employee_id))
            .await?
            .ok_or(EmployeesServiceError::ProfileNotFound)
    }
}

// ── ListProfiles ─────────────────────────────────────────────────────────────

pub struct ListProfilesUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> ListProfilesUseCase<R> {
    pub async fn execute(&self, pager: Pager) -> Result<PagerResult<Profile>, EmployeesServiceError> {
        pager.validate()?;
        let data = self.repo.get_all(&pager).await?;
        let total = self.repo.count_documents(&Filter::All).await?;
        Ok(PagerResult::new(&pager, total, data))
    }
}

// ── CreateProfile ────────────────────────────────────────────────────────────

#[derive(Debug, Validate)]
pub struct CreateProfileInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub gender: Gender,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub birthday: String,
    pub roles: Vec<EmployeeRole>,
}

pub struct CreateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> CreateProfileUseCase<R> {
    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        input: CreateProfileInput,
    ) -> Result<Profile, EmployeesServiceError> {
        input.validate()?;
        let existing = self
            .repo
            .count_documents(&Filter::EmployeeId(employee_id))
            .await?;
        if existing > 0 {
            return Err(EmployeesServiceError::ProfileAlreadyExists);
        }
        let now = Utc::now();
        let profile = Profile {
            id: RecordId::generate(),
            employee_id,
            email: input.email,
            name: input.name,
            last_name: input.last_name,
            gender: input.gender,
            phone_number: input.phone_number,
            birthday: input.birthday,
            roles: input.roles,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&profile).await
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

#[derive(Debug, Default, Validate)]
pub struct UpdateProfileInput {
    #[validate(email)]
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<Gender>,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub roles: Option<Vec<EmployeeRole>>,
}

impl UpdateProfileInput {
    /// Drop blank strings and empty role lists so they are not written.
    fn normalized(self) -> Self {
        Self {
            email: non_blank(self.email),
            name: non_blank(self.name),
            last_name: non_blank(self.last_name),
            gender: self.gender,
            phone_number: non_blank(self.phone_number),
            birthday: non_blank(self.birthday),
            roles: self.roles.filter(|roles| !roles.is_empty()),
        }
    }

    fn into_patch(self) -> ProfilePatch {
        ProfilePatch {
            email: self.email,
            name: self.name,
            last_name: self.last_name,
            gender: self.gender,
            phone_number: self.phone_number,
            birthday: self.birthday,
            roles: self.roles,
            updated_at: Utc::now(),
        }
    }
}

/// Partial profile update followed by a best-effort role-change notification.
pub struct UpdateProfileUseCase<R: ProfileRepository, P: ProfileEventPublisher> {
    pub repo: R,
    pub events: P,
}

impl<R: ProfileRepository, P: ProfileEventPublisher> UpdateProfileUseCase<R, P> {
    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        input: UpdateProfileInput,
    ) -> Result<Profile, EmployeesServiceError> {
        let input = input.normalized();
        input.validate()?;
        let patch = input.into_patch();
        let profile = self
            .repo
            .update(&Filter::EmployeeId(employee_id), &patch)
            .await?
            .ok_or(EmployeesServiceError::ProfileNotFound)?;

        match patch.roles {
            Some(ref roles) => {
                let message = ProfileUpdateMessage::new(employee_id, roles);
                if let Err(e) = self.events.publish_profile_update(&message).await {
                    tracing::warn!(
                        employee_id = %employee_id,
                        error = %e,
                        "failed to publish profile update"
                    );
                }
            }
            None => {
                tracing::debug!(employee_id = %employee_id, "no role change, skipping publish");
            }
        }

        Ok(profile)
    }
}
