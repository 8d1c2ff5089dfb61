use chrono::Utc;
use validator::Validate;

use vet_domain::id::RecordId;
use vet_domain::pagination::{Pager, PagerResult};

use crate::domain::repository::CatalogPositionRepository;
use crate::domain::types::{CatalogPosition, CatalogPositionPatch, Filter, non_blank};
use crate::error::EmployeesServiceError;

/// Fail with a conflict when another position already uses `name`.
async fn ensure_name_available<R: CatalogPositionRepository>(
    repo: &R,
    name: &str,
    except: Option<RecordId>,
) -> Result<(), EmployeesServiceError> {
    match repo.get(&Filter::Name(name.to_owned())).await? {
        Some(found) if Some(found.id) != except => {
            Err(EmployeesServiceError::CatalogPositionAlreadyExists)
        }
        _ => Ok(()),
    }
}

// ── GetCatalogPosition ───────────────────────────────────────────────────────

pub struct GetCatalogPositionUseCase<R: CatalogPositionRepository> {
    pub repo: R,
}

impl<R: CatalogPositionRepository> GetCatalogPositionUseCase<R> {
    pub async fn execute(&self, id: RecordId) -> Result<CatalogPosition, EmployeesServiceError> {
        self.repo
            .get(&Filter::Id(id))
            .await?
            .ok_or(EmployeesServiceError::CatalogPositionNotFound)
    }
}

// ── ListCatalogPositions ─────────────────────────────────────────────────────

pub struct ListCatalogPositionsUseCase<R: CatalogPositionRepository> {
    pub repo: R,
}

impl<R: CatalogPositionRepository> ListCatalogPositionsUseCase<R> {
    pub async fn execute(
        &self,
        pager: Pager,
    ) -> Result<PagerResult<CatalogPosition>, EmployeesServiceError> {
        pager.validate()?;
        let data = self.repo.get_all(&pager).await?;
        let total = self.repo.count_documents(&Filter::All).await?;
        Ok(PagerResult::new(&pager, total, data))
    }
}

// ── CreateCatalogPosition ────────────────────────────────────────────────────

#[derive(Debug, Validate)]
pub struct CreateCatalogPositionInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
}

pub struct CreateCatalogPositionUseCase<R: CatalogPositionRepository> {
    pub repo: R,
}

impl<R: CatalogPositionRepository> CreateCatalogPositionUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateCatalogPositionInput,
    ) -> Result<CatalogPosition, EmployeesServiceError> {
        input.validate()?;
        ensure_name_available(&self.repo, &input.name, None).await?;
        let now = Utc::now();
        let position = CatalogPosition {
            id: RecordId::generate(),
            name: input.name,
            description: input.description,
            active: true,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&position).await
    }
}

// ── UpdateCatalogPosition ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct UpdateCatalogPositionInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

pub struct UpdateCatalogPositionUseCase<R: CatalogPositionRepository> {
    pub repo: R,
}

impl<R: CatalogPositionRepository> UpdateCatalogPositionUseCase<R> {
    pub async fn execute(
        &self,
        id: RecordId,
        input: UpdateCatalogPositionInput,
    ) -> Result<CatalogPosition, EmployeesServiceError> {
        let patch = CatalogPositionPatch {
            name: non_blank(input.name),
            description: non_blank(input.description),
            active: input.active,
            updated_at: Utc::now(),
        };
        if let Some(ref name) = patch.name {
            ensure_name_available(&self.repo, name, Some(id)).await?;
        }
        self.repo
            .update(&Filter::Id(id), &patch)
            .await?
            .ok_or(EmployeesServiceError::CatalogPositionNotFound)
    }
}

// ── DeleteCatalogPosition ────────────────────────────────────────────────────

pub struct DeleteCatalogPositionUseCase<R: CatalogPositionRepository> {
    pub repo: R,
}

impl<R: CatalogPositionRepository> DeleteCatalogPositionUseCase<R> {
    pub async fn execute(&self, id: RecordId) -> Result<(), EmployeesServiceError> {
        if self.repo.delete(&Filter::Id(id)).await? {
            Ok(())
        } else {
            Err(EmployeesServiceError::CatalogPositionNotFound)
        }
    }
}
