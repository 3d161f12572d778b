//! Investment ledger over the `aethera_investments` blob.

use aethera_core::error::CoreError;
use aethera_core::types::{new_entity_id, Amount};
use chrono::Utc;

use super::project_repo::apply_funding;
use crate::models::investment::Investment;
use crate::models::project::Project;
use crate::{DbError, Store};

pub struct InvestmentRepo;

impl InvestmentRepo {
    /// Record an investment and credit the project in a single write.
    ///
    /// The project must currently accept investment (`LIVE`). Crediting may
    /// move it to `FUNDED`.
    pub async fn record(
        store: &Store,
        investor_id: &str,
        project_id: &str,
        amount: Amount,
    ) -> Result<(Project, Investment), DbError> {
        store
            .mutate(|s| {
                let project = s.project_mut(project_id)?;
                if !project.status.accepts_investment() {
                    return Err(CoreError::Conflict(format!(
                        "Project '{project_id}' is not open for investment (status {})",
                        project.status
                    )));
                }
                apply_funding(project, amount);
                let project = project.clone();

                let investment = Investment {
                    id: new_entity_id(),
                    investor_id: investor_id.to_string(),
                    project_id: project_id.to_string(),
                    amount,
                    timestamp: Utc::now(),
                };
                s.investments.push(investment.clone());
                Ok((project, investment))
            })
            .await
    }

    /// One investor's investments, oldest first.
    pub async fn list_by_investor(store: &Store, investor_id: &str) -> Vec<Investment> {
        store
            .read(|s| {
                s.investments
                    .iter()
                    .filter(|i| i.investor_id == investor_id)
                    .cloned()
                    .collect()
            })
            .await
    }

    /// All investments into one project, oldest first.
    pub async fn list_by_project(store: &Store, project_id: &str) -> Vec<Investment> {
        store
            .read(|s| {
                s.investments
                    .iter()
                    .filter(|i| i.project_id == project_id)
                    .cloned()
                    .collect()
            })
            .await
    }
}
