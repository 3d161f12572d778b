//! The single active session, stored under `aethera_session`.

use aethera_core::error::CoreError;
use aethera_core::kyc::KycStatus;
use aethera_core::roles::{UserRole, ADMIN_EMAIL};
use aethera_core::types::new_entity_id;

use crate::models::user::User;
use crate::{DbError, Store};

pub struct SessionRepo;

impl SessionRepo {
    /// The logged-in user, as last written to the session blob.
    pub async fn current(store: &Store) -> Option<User> {
        store.read(|s| s.session.clone()).await
    }

    /// Log in as `email` with `role`.
    ///
    /// Unknown emails are registered on the fly (installers start with KYC
    /// `NONE`), except for admins: the only admin that can appear this way
    /// is [`ADMIN_EMAIL`]. A known email must match the requested role.
    pub async fn login(store: &Store, email: &str, role: UserRole) -> Result<User, DbError> {
        let (user, registered) = store
            .mutate(|s| {
                let existing = s.users.iter().find(|u| u.email == email).cloned();
                let (user, registered) = match existing {
                    Some(existing) => (existing, false),
                    None => {
                        if role == UserRole::Admin && email != ADMIN_EMAIL {
                            return Err(CoreError::Unauthorized(
                                "Invalid Admin Credentials".into(),
                            ));
                        }
                        let user = demo_account(email, role);
                        s.users.push(user.clone());
                        (user, true)
                    }
                };

                if user.role != role {
                    return Err(CoreError::Unauthorized(format!(
                        "User exists but is not a {role}"
                    )));
                }

                s.session = Some(user.clone());
                Ok((user, registered))
            })
            .await?;

        tracing::info!(user_id = %user.id, role = %user.role, registered, "User logged in");
        Ok(user)
    }

    /// Clear the session. A no-op when nobody is logged in.
    pub async fn logout(store: &Store) -> Result<(), DbError> {
        let previous = store.mutate(|s| Ok(s.session.take())).await?;
        if let Some(user) = previous {
            tracing::info!(user_id = %user.id, "User logged out");
        }
        Ok(())
    }
}

/// Account created for an email seen for the first time.
fn demo_account(email: &str, role: UserRole) -> User {
    let name = email.split('@').next().unwrap_or(email).to_string();
    User {
        id: new_entity_id(),
        name,
        email: email.to_string(),
        role,
        kyc_status: (role == UserRole::Installer).then_some(KycStatus::None),
        wallet_address: None,
        company_name: None,
    }
}
