//! The mock chain: wallet connect, token minting, investing and release.

use std::sync::Arc;
use std::time::Duration;

use aethera_core::error::CoreError;
use aethera_core::funding;
use aethera_core::project_status::ProjectStatus;
use aethera_core::types::Amount;
use aethera_db::models::investment::Investment;
use aethera_db::models::project::{Project, TokenizationDetails};
use aethera_db::repositories::{InvestmentRepo, ProjectRepo};
use aethera_db::Store;

use crate::config::ChainConfig;
use crate::error::ChainError;
use crate::wallet;

/// Simulated chain backed by the platform store.
#[derive(Debug, Clone)]
pub struct MockChain {
    store: Arc<Store>,
    config: ChainConfig,
}

impl MockChain {
    pub fn new(store: Arc<Store>, config: ChainConfig) -> Self {
        Self { store, config }
    }

    /// "Connect" a wallet and return its address.
    pub async fn connect_wallet(&self) -> String {
        settle(self.config.connect_delay).await;
        let address = wallet::random_address();
        tracing::info!(%address, "[chain] Wallet connected");
        address
    }

    /// Mint `supply` tokens named `symbol` for a project, putting it `LIVE`.
    pub async fn mint_tokens(
        &self,
        project_id: &str,
        supply: u64,
        symbol: &str,
    ) -> Result<Project, ChainError> {
        tracing::info!(project_id, supply, symbol, "[chain] Minting tokens");
        settle(self.config.mint_delay).await;

        let details = TokenizationDetails {
            token_supply: supply,
            token_symbol: symbol.to_string(),
        };
        let project =
            ProjectRepo::update_status(&self.store, project_id, ProjectStatus::Live, Some(details))
                .await?;
        Ok(project)
    }

    /// Mint with the platform's standard parameters: one token per USD of
    /// goal, symbol derived from the project id.
    pub async fn tokenize(&self, project_id: &str) -> Result<Project, ChainError> {
        let goal = ProjectRepo::find_by_id(&self.store, project_id)
            .await
            .map(|p| p.funding_goal)
            .ok_or_else(|| CoreError::not_found("Project", project_id))?;

        self.mint_tokens(
            project_id,
            funding::token_supply_for(goal),
            &funding::token_symbol_for(project_id),
        )
        .await
    }

    /// Invest `amount` USDC from `wallet_address` into a live project.
    pub async fn invest(
        &self,
        project_id: &str,
        investor_id: &str,
        amount: Amount,
        wallet_address: &str,
    ) -> Result<(Project, Investment), ChainError> {
        funding::validate_investment_amount(amount)?;

        tracing::info!(
            project_id,
            wallet = wallet_address,
            amount,
            "[chain] Investing USDC",
        );
        settle(self.config.invest_delay).await;

        let (project, investment) =
            InvestmentRepo::record(&self.store, investor_id, project_id, amount).await?;

        tracing::info!(
            project_id,
            investment_id = %investment.id,
            current_funding = project.current_funding,
            status = %project.status,
            "[chain] Investment settled",
        );
        Ok((project, investment))
    }

    /// Release escrowed funds to the installer, marking the project
    /// `DISBURSED`.
    pub async fn release_funds(
        &self,
        project_id: &str,
        installer_wallet: Option<&str>,
    ) -> Result<Project, ChainError> {
        tracing::info!(
            project_id,
            wallet = installer_wallet.unwrap_or("<unlinked>"),
            "[chain] Releasing funds from escrow",
        );
        settle(self.config.release_delay).await;

        let project =
            ProjectRepo::update_status(&self.store, project_id, ProjectStatus::Disbursed, None)
                .await?;
        Ok(project)
    }
}

async fn settle(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
