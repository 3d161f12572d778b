//! Repositories over the shared [`Store`](crate::Store).
//!
//! Each repository is a zero-sized struct with associated functions taking
//! the store, mirroring one blob (or the session) each.

mod investment_repo;
mod project_repo;
mod session_repo;
mod user_repo;

pub use investment_repo::InvestmentRepo;
pub use project_repo::ProjectRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
