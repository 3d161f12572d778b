//! Handlers for browsing, submitting and investing in projects.
//!
//! What a user sees depends on their role: admins see every project,
//! installers their own, investors only `LIVE`, `FUNDED` and `DISBURSED`.

use aethera_core::error::CoreError;
use aethera_core::funding;
use aethera_core::project_status::ProjectStatus;
use aethera_core::roles::UserRole;
use aethera_db::models::investment::Investment;
use aethera_db::models::project::{CreateProject, InvestRequest, Project, ProjectListParams};
use aethera_db::repositories::ProjectRepo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireInstaller, RequireInvestor};
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a settled investment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReceipt {
    pub project: Project,
    pub investment: Investment,
    pub estimated_tokens: f64,
    pub token_symbol: Option<String>,
    /// Funding progress after this investment, 0 to 100.
    pub funding_progress: f64,
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

pub async fn list_projects(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<impl IntoResponse> {
    let status = params
        .status
        .as_deref()
        .map(ProjectStatus::from_str_db)
        .transpose()?;

    let projects = match auth.role() {
        UserRole::Admin => ProjectRepo::list(&state.store, status).await,
        UserRole::Installer => {
            ProjectRepo::list_by_installer(&state.store, auth.id(), status).await
        }
        UserRole::Investor => ProjectRepo::list_investor_visible(&state.store, status).await,
    };

    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// POST /projects
// ---------------------------------------------------------------------------

/// Submit a project for review. Requires approved KYC.
pub async fn create_project(
    RequireInstaller(installer): RequireInstaller,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::create(&state.store, &installer.user, &input).await?;

    tracing::info!(
        project_id = %project.id,
        installer_id = %installer.id(),
        funding_goal = project.funding_goal,
        "Project submitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

// ---------------------------------------------------------------------------
// GET /projects/{id}
// ---------------------------------------------------------------------------

pub async fn get_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Project", id.as_str()))?;

    match auth.role() {
        UserRole::Admin => {}
        UserRole::Installer if project.installer_id != auth.id() => {
            return Err(AppError::Core(CoreError::Forbidden(
                "You can only view your own projects".into(),
            )));
        }
        UserRole::Installer => {}
        // Unlisted projects do not exist as far as investors are concerned.
        UserRole::Investor if !project.status.is_investor_visible() => {
            return Err(AppError::Core(CoreError::not_found("Project", id)));
        }
        UserRole::Investor => {}
    }

    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// POST /projects/{id}/invest
// ---------------------------------------------------------------------------

/// Invest in a live project from the investor's connected wallet.
pub async fn invest(
    RequireInvestor(investor): RequireInvestor,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<InvestRequest>,
) -> AppResult<impl IntoResponse> {
    let wallet = investor.user.wallet_address.clone().ok_or_else(|| {
        CoreError::Forbidden("Connect a wallet before investing".into())
    })?;

    let (project, investment) = state
        .chain
        .invest(&id, investor.id(), input.amount, &wallet)
        .await?;

    tracing::info!(
        project_id = %project.id,
        investor_id = %investor.id(),
        amount = investment.amount,
        status = %project.status,
        "Investment completed",
    );

    let receipt = InvestmentReceipt {
        estimated_tokens: funding::estimated_tokens(investment.amount),
        token_symbol: project.token_symbol.clone(),
        funding_progress: funding::progress_percent(project.current_funding, project.funding_goal),
        project,
        investment,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: receipt })))
}
