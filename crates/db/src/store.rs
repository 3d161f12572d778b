//! In-memory snapshot of all blobs, persisted in full on every change.

use aethera_core::error::CoreError;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::kv::{KvStore, INVESTMENTS_KEY, PROJECTS_KEY, SESSION_KEY, USERS_KEY};
use crate::models::investment::Investment;
use crate::models::project::Project;
use crate::models::user::User;
use crate::{seed, DbError, DbPool};

/// Everything the platform knows, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub projects: Vec<Project>,
    pub users: Vec<User>,
    pub investments: Vec<Investment>,
    /// The logged-in user, if any.
    pub session: Option<User>,
}

impl StoreState {
    /// State of a store that has never been written.
    pub fn seeded() -> Self {
        Self {
            projects: seed::initial_projects(),
            users: seed::initial_users(),
            investments: Vec::new(),
            session: None,
        }
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: &str) -> Result<&mut Project, CoreError> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found("Project", id))
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: &str) -> Result<&mut User, CoreError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| CoreError::not_found("User", id))
    }

    /// Refresh the session copy after `user` changed.
    pub fn sync_session(&mut self, user: &User) {
        if let Some(session) = self.session.as_mut() {
            if session.id == user.id {
                *session = user.clone();
            }
        }
    }
}

/// Owner of the platform state.
///
/// Blobs are read once in [`Store::open`]. Each [`Store::mutate`] works on
/// a copy of the state, writes every blob back in one transaction, and only
/// then replaces the in-memory state.
#[derive(Debug)]
pub struct Store {
    kv: KvStore,
    state: Mutex<StoreState>,
}

impl Store {
    /// Load the blobs from `pool`, falling back to seed data for any that
    /// are missing.
    pub async fn open(pool: DbPool) -> Result<Self, DbError> {
        let kv = KvStore::new(pool);
        let defaults = StoreState::seeded();

        let projects = kv.get_json(PROJECTS_KEY).await?;
        let users = kv.get_json(USERS_KEY).await?;
        let investments = kv.get_json(INVESTMENTS_KEY).await?;
        let session = kv.get_json(SESSION_KEY).await?;

        let seeded = projects.is_none() || users.is_none();
        let state = StoreState {
            projects: projects.unwrap_or(defaults.projects),
            users: users.unwrap_or(defaults.users),
            investments: investments.unwrap_or(defaults.investments),
            session,
        };

        tracing::info!(
            projects = state.projects.len(),
            users = state.users.len(),
            investments = state.investments.len(),
            seeded,
            "Store loaded",
        );

        Ok(Self {
            kv,
            state: Mutex::new(state),
        })
    }

    pub fn kv(&self) -> &KvStore {
        &self.kv
    }

    pub fn pool(&self) -> &DbPool {
        self.kv.pool()
    }

    /// Run a read-only closure against the current state.
    pub async fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    /// Apply `f` to a copy of the state, persist the copy, then commit it.
    ///
    /// If `f` or the write fails, the in-memory state is left untouched.
    pub async fn mutate<R>(
        &self,
        f: impl FnOnce(&mut StoreState) -> Result<R, CoreError>,
    ) -> Result<R, DbError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let out = f(&mut next)?;
        self.persist(&next).await?;
        *state = next;
        Ok(out)
    }

    async fn persist(&self, state: &StoreState) -> Result<(), DbError> {
        let session = match &state.session {
            Some(user) => Some(encode(SESSION_KEY, user)?),
            None => None,
        };
        let writes = [
            (PROJECTS_KEY, Some(encode(PROJECTS_KEY, &state.projects)?)),
            (USERS_KEY, Some(encode(USERS_KEY, &state.users)?)),
            (INVESTMENTS_KEY, Some(encode(INVESTMENTS_KEY, &state.investments)?)),
            (SESSION_KEY, session),
        ];
        self.kv.write_batch(&writes).await?;
        tracing::debug!("Store persisted");
        Ok(())
    }
}

fn encode<T: Serialize + ?Sized>(key: &'static str, value: &T) -> Result<String, DbError> {
    serde_json::to_string(value).map_err(|source| DbError::Serialization { key, source })
}
