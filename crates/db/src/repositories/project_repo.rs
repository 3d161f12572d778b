//! Project lifecycle and funding ledger over the `aethera_projects` blob.

use aethera_core::error::CoreError;
use aethera_core::funding;
use aethera_core::kyc;
use aethera_core::project_status::{self, ProjectStatus};
use aethera_core::roles::UserRole;
use aethera_core::types::{new_entity_id, Amount};
use chrono::Utc;
use validator::Validate;

use crate::models::project::{CreateProject, Project, TokenizationDetails};
use crate::models::user::User;
use crate::{DbError, Store};

/// Provides create/read/update operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in insertion order, optionally filtered by status.
    pub async fn list(store: &Store, status: Option<ProjectStatus>) -> Vec<Project> {
        store
            .read(|s| {
                s.projects
                    .iter()
                    .filter(|p| status.map_or(true, |st| p.status == st))
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Projects owned by one installer, optionally filtered by status.
    pub async fn list_by_installer(
        store: &Store,
        installer_id: &str,
        status: Option<ProjectStatus>,
    ) -> Vec<Project> {
        store
            .read(|s| {
                s.projects
                    .iter()
                    .filter(|p| p.installer_id == installer_id)
                    .filter(|p| status.map_or(true, |st| p.status == st))
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Projects an investor may browse (`LIVE`, `FUNDED`, `DISBURSED`).
    pub async fn list_investor_visible(
        store: &Store,
        status: Option<ProjectStatus>,
    ) -> Vec<Project> {
        store
            .read(|s| {
                s.projects
                    .iter()
                    .filter(|p| p.status.is_investor_visible())
                    .filter(|p| status.map_or(true, |st| p.status == st))
                    .cloned()
                    .collect()
            })
            .await
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Option<Project> {
        store.read(|s| s.project(id).cloned()).await
    }

    /// Submit a project on behalf of `installer`.
    ///
    /// The project always starts in `PENDING_REVIEW` with zero funding. The
    /// installer must hold an approved KYC status.
    pub async fn create(
        store: &Store,
        installer: &User,
        input: &CreateProject,
    ) -> Result<Project, DbError> {
        input.validate()?;
        funding::validate_funding_goal(input.funding_goal)?;

        store
            .mutate(|s| {
                // Re-read so a KYC decision made after the caller loaded the
                // user is honoured.
                let owner = s
                    .user(&installer.id)
                    .ok_or_else(|| CoreError::not_found("User", installer.id.as_str()))?;
                if owner.role != UserRole::Installer {
                    return Err(CoreError::Forbidden(
                        "Only installers can submit projects".into(),
                    ));
                }
                kyc::ensure_can_create_projects(owner.kyc_status)?;

                let project = Project {
                    id: new_entity_id(),
                    installer_id: owner.id.clone(),
                    installer_name: owner.display_name().to_string(),
                    title: input.title.clone(),
                    summary: input.summary.clone(),
                    location: input.location.clone(),
                    funding_goal: input.funding_goal,
                    current_funding: 0.0,
                    status: ProjectStatus::PendingReview,
                    documents: input.documents.clone(),
                    token_supply: None,
                    token_symbol: None,
                    created_at: Utc::now(),
                };
                s.projects.push(project.clone());
                Ok(project)
            })
            .await
    }

    /// Move a project to `status`, merging token details when given.
    ///
    /// The move must be allowed by the project transition table.
    pub async fn update_status(
        store: &Store,
        id: &str,
        status: ProjectStatus,
        tokenization: Option<TokenizationDetails>,
    ) -> Result<Project, DbError> {
        let project = store
            .mutate(|s| {
                let project = s.project_mut(id)?;
                project_status::validate_transition(project.status, status)?;
                project.status = status;
                if let Some(details) = tokenization {
                    project.token_supply = Some(details.token_supply);
                    project.token_symbol = Some(details.token_symbol);
                }
                Ok(project.clone())
            })
            .await?;

        tracing::info!(
            project_id = %project.id,
            status = %project.status,
            "Project status updated",
        );
        Ok(project)
    }

    /// Add `amount` to a project's running total.
    ///
    /// A `LIVE` project whose total reaches its goal becomes `FUNDED`. The
    /// amount is not range-checked here; investor limits apply upstream.
    pub async fn add_funding(store: &Store, id: &str, amount: Amount) -> Result<Project, DbError> {
        let project = store
            .mutate(|s| {
                let project = s.project_mut(id)?;
                apply_funding(project, amount);
                Ok(project.clone())
            })
            .await?;

        tracing::info!(
            project_id = %project.id,
            amount,
            current_funding = project.current_funding,
            status = %project.status,
            "Funding added",
        );
        Ok(project)
    }

    /// Top a project up to exactly its goal (admin demo shortcut).
    pub async fn force_full_funding(store: &Store, id: &str) -> Result<Project, DbError> {
        let (project, added) = store
            .mutate(|s| {
                let project = s.project_mut(id)?;
                let remaining =
                    funding::remaining_to_goal(project.current_funding, project.funding_goal);
                apply_funding(project, remaining);
                Ok((project.clone(), remaining))
            })
            .await?;

        tracing::info!(
            project_id = %project.id,
            amount = added,
            status = %project.status,
            "Project force-funded to goal",
        );
        Ok(project)
    }
}

/// Increment the total and apply the automatic `LIVE -> FUNDED` move.
pub(crate) fn apply_funding(project: &mut Project, amount: Amount) {
    project.current_funding += amount;
    project.status = project_status::status_after_funding(
        project.status,
        project.current_funding,
        project.funding_goal,
    );
}
