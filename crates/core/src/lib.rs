//! Domain rules for the Aethera solar crowdfunding platform.
//!
//! Everything in this crate is pure: status enums and their transition
//! tables, funding arithmetic, and the shared [`error::CoreError`] type.
//! Persistence lives in `aethera-db`, HTTP in `aethera-api`.

pub mod error;
pub mod funding;
pub mod kyc;
pub mod project_status;
pub mod roles;
pub mod types;
