pub mod admin;
pub mod auth;
pub mod investments;
pub mod kyc;
pub mod projects;
pub mod wallet;
