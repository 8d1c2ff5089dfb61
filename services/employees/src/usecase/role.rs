use chrono::Utc;
use validator::Validate;

use vet_domain::id::RecordId;

use crate::domain::repository::RoleRepository;
use crate::domain::types::{Filter, Role, RolePatch, non_blank};
use crate::error::EmployeesServiceError;

// ── ListRoles ────────────────────────────────────────────────────────────────

pub struct ListRolesUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> ListRolesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Role>, EmployeesServiceError> {
        self.repo.list().await
    }
}

// ── CreateRole ───────────────────────────────────────────────────────────────

#[derive(Debug, Validate)]
pub struct CreateRoleInput {
    #[validate(length(min = 1))]
    pub name: String,
}

pub struct CreateRoleUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> CreateRoleUseCase<R> {
    pub async fn execute(&self, input: CreateRoleInput) -> Result<Role, EmployeesServiceError> {
        input.validate()?;
        let now = Utc::now();
        let role = Role {
            id: RecordId::generate(),
            name: input.name,
            active: true,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&role).await
    }
}

// ── UpdateRole ───────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UpdateRoleInput {
    pub name: Option<String>,
    pub active: Option<bool>,
}

pub struct UpdateRoleUseCase<R: RoleRepository> {
    pub repo: R,
}

impl<R: RoleRepository> UpdateRoleUseCase<R> {
    pub async fn execute(
        &self,
        id: RecordId,
        input: UpdateRoleInput,
    ) -> Result<Role, EmployeesServiceError> {
        let patch = RolePatch {
            name: non_blank(input.name),
            active: input.active,
            updated_at: Utc::now(),
        };
        self.repo
            .update(&Filter::Id(id), &patch)
            .await?
            .ok_or(EmployeesServiceError::RoleNotFound)
    }
}
