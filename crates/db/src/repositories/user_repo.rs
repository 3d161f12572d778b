//! User directory and KYC state over the `aethera_users` blob.

use aethera_core::error::CoreError;
use aethera_core::kyc::{self, KycStatus};
use aethera_core::roles::UserRole;
use validator::Validate;

use crate::models::user::{KycSubmission, User};
use crate::{DbError, Store};

pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(store: &Store, id: &str) -> Option<User> {
        store.read(|s| s.user(id).cloned()).await
    }

    /// Exact-match lookup; emails are unique.
    pub async fn find_by_email(store: &Store, email: &str) -> Option<User> {
        store
            .read(|s| s.users.iter().find(|u| u.email == email).cloned())
            .await
    }

    /// Installers waiting for an admin KYC decision.
    pub async fn list_pending_kyc(store: &Store) -> Vec<User> {
        store
            .read(|s| {
                s.users
                    .iter()
                    .filter(|u| {
                        u.role == UserRole::Installer && u.kyc_status == Some(KycStatus::Pending)
                    })
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Installer submits (or resubmits) the KYC form: status becomes
    /// `PENDING` and the legal and company names are updated.
    pub async fn submit_kyc(
        store: &Store,
        user_id: &str,
        input: &KycSubmission,
    ) -> Result<User, DbError> {
        input.validate()?;

        let user = store
            .mutate(|s| {
                let user = s.user_mut(user_id)?;
                ensure_installer(user)?;
                kyc::validate_transition(user.kyc_status.unwrap_or_default(), KycStatus::Pending)?;
                user.kyc_status = Some(KycStatus::Pending);
                user.name = input.full_name.clone();
                user.company_name = Some(input.company_name.clone());
                let user = user.clone();
                s.sync_session(&user);
                Ok(user)
            })
            .await?;

        tracing::info!(user_id = %user.id, "KYC submitted");
        Ok(user)
    }

    /// Move an installer's KYC status, checked against the KYC table.
    pub async fn update_kyc(
        store: &Store,
        user_id: &str,
        status: KycStatus,
    ) -> Result<User, DbError> {
        let user = store
            .mutate(|s| {
                let user = s.user_mut(user_id)?;
                ensure_installer(user)?;
                kyc::validate_transition(user.kyc_status.unwrap_or_default(), status)?;
                user.kyc_status = Some(status);
                let user = user.clone();
                s.sync_session(&user);
                Ok(user)
            })
            .await?;

        tracing::info!(user_id = %user.id, kyc_status = %status, "KYC status updated");
        Ok(user)
    }

    /// Attach a (mock) wallet address to a user.
    pub async fn set_wallet(store: &Store, user_id: &str, address: &str) -> Result<User, DbError> {
        store
            .mutate(|s| {
                let user = s.user_mut(user_id)?;
                user.wallet_address = Some(address.to_string());
                let user = user.clone();
                s.sync_session(&user);
                Ok(user)
            })
            .await
    }
}

fn ensure_installer(user: &User) -> Result<(), CoreError> {
    if user.role == UserRole::Installer {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "KYC applies to installers only; user '{}' is {}",
            user.id, user.role
        )))
    }
}
