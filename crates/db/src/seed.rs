//! Demo data used when the store has never been written.

use aethera_core::kyc::KycStatus;
use aethera_core::project_status::ProjectStatus;
use aethera_core::roles::{UserRole, ADMIN_EMAIL};
use chrono::{Duration, Utc};

use crate::models::project::Project;
use crate::models::user::User;

pub fn initial_projects() -> Vec<Project> {
    let now = Utc::now();
    vec![
        Project {
            id: "p1".into(),
            installer_id: "inst1".into(),
            installer_name: "SolarFlow Inc.".into(),
            title: "Sunnyvale Community Grid".into(),
            summary: "A 500kW community solar project serving 200 households in Sunnyvale, CA."
                .into(),
            location: "Sunnyvale, CA".into(),
            funding_goal: 250_000.0,
            current_funding: 125_000.0,
            status: ProjectStatus::Live,
            documents: vec!["SitePlan.pdf".into(), "Financials.xlsx".into()],
            token_supply: Some(250_000),
            token_symbol: Some("SVGRID".into()),
            created_at: now,
        },
        Project {
            id: "p2".into(),
            installer_id: "inst2".into(),
            installer_name: "EcoBuild Partners".into(),
            title: "Nevada Desert Array".into(),
            summary: "Large scale ground-mount installation for industrial supply.".into(),
            location: "Reno, NV".into(),
            funding_goal: 1_000_000.0,
            current_funding: 1_000_000.0,
            status: ProjectStatus::Funded,
            documents: vec!["ImpactReport.pdf".into()],
            token_supply: Some(1_000_000),
            token_symbol: Some("NVDES".into()),
            created_at: now - Duration::days(1),
        },
        Project {
            id: "p3".into(),
            installer_id: "inst1".into(),
            installer_name: "SolarFlow Inc.".into(),
            title: "High School Rooftop Retrofit".into(),
            summary: "Retrofitting the local high school with high-efficiency panels.".into(),
            location: "Austin, TX".into(),
            funding_goal: 75_000.0,
            current_funding: 0.0,
            status: ProjectStatus::PendingReview,
            documents: vec!["Proposal.pdf".into()],
            token_supply: None,
            token_symbol: None,
            created_at: now,
        },
    ]
}

pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "admin1".into(),
            name: "System Admin".into(),
            email: ADMIN_EMAIL.into(),
            role: UserRole::Admin,
            kyc_status: None,
            wallet_address: None,
            company_name: None,
        },
        User {
            id: "inst1".into(),
            name: "John Solar".into(),
            email: "john@solarflow.com".into(),
            role: UserRole::Installer,
            kyc_status: Some(KycStatus::Approved),
            wallet_address: None,
            company_name: Some("SolarFlow Inc.".into()),
        },
        User {
            id: "inv1".into(),
            name: "Alice Investor".into(),
            email: "alice@capital.com".into(),
            role: UserRole::Investor,
            kyc_status: None,
            wallet_address: Some("0x123...abc".into()),
            company_name: None,
        },
    ]
}
