//! Integration tests for the project lifecycle and funding ledger.

mod common;

use aethera_core::error::CoreError;
use aethera_core::project_status::ProjectStatus;
use aethera_db::models::project::TokenizationDetails;
use aethera_db::repositories::{InvestmentRepo, ProjectRepo, UserRepo};
use aethera_db::DbError;
use assert_matches::assert_matches;
use common::{new_project, test_store};

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_project_starts_pending_with_zero_funding() {
    let store = test_store().await;
    let installer = UserRepo::find_by_id(&store, "inst1").await.unwrap();

    let project = ProjectRepo::create(&store, &installer, &new_project("Rooftop", 75_000.0))
        .await
        .unwrap();

    assert_eq!(project.status, ProjectStatus::PendingReview);
    assert_eq!(project.current_funding, 0.0);
    assert_eq!(project.installer_id, "inst1");
    assert_eq!(project.installer_name, "SolarFlow Inc.");
    assert!(project.token_supply.is_none());

    let listed = ProjectRepo::list_by_installer(&store, "inst1", None).await;
    assert!(listed.iter().any(|p| p.id == project.id));
}

#[tokio::test]
async fn create_rejects_non_positive_goal() {
    let store = test_store().await;
    let installer = UserRepo::find_by_id(&store, "inst1").await.unwrap();

    let result = ProjectRepo::create(&store, &installer, &new_project("Zero", 0.0)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Validation(_))));
}

#[tokio::test]
async fn create_rejects_empty_title() {
    let store = test_store().await;
    let installer = UserRepo::find_by_id(&store, "inst1").await.unwrap();

    let result = ProjectRepo::create(&store, &installer, &new_project("", 10_000.0)).await;
    assert_matches!(
        result,
        Err(DbError::Core(CoreError::Validation(msg))) if msg.contains("title")
    );
}

#[tokio::test]
async fn investor_cannot_create_projects() {
    let store = test_store().await;
    let investor = UserRepo::find_by_id(&store, "inv1").await.unwrap();

    let result = ProjectRepo::create(&store, &investor, &new_project("Nope", 10_000.0)).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Forbidden(_))));
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reaching_goal_while_live_marks_funded() {
    let store = test_store().await;

    // p1: goal 250000, current 125000, LIVE.
    let project = ProjectRepo::add_funding(&store, "p1", 125_000.0).await.unwrap();

    assert_eq!(project.current_funding, 250_000.0);
    assert_eq!(project.status, ProjectStatus::Funded);
}

#[tokio::test]
async fn funding_below_goal_stays_live() {
    let store = test_store().await;

    let project = ProjectRepo::add_funding(&store, "p1", 1_000.0).await.unwrap();

    assert_eq!(project.current_funding, 126_000.0);
    assert_eq!(project.status, ProjectStatus::Live);
}

#[tokio::test]
async fn funding_non_live_project_never_transitions() {
    let store = test_store().await;

    // p3: goal 75000, PENDING_REVIEW.
    let project = ProjectRepo::add_funding(&store, "p3", 80_000.0).await.unwrap();

    assert_eq!(project.current_funding, 80_000.0);
    assert_eq!(project.status, ProjectStatus::PendingReview);
}

#[tokio::test]
async fn force_full_funding_tops_up_to_goal() {
    let store = test_store().await;

    let project = ProjectRepo::force_full_funding(&store, "p1").await.unwrap();

    assert_eq!(project.current_funding, project.funding_goal);
    assert_eq!(project.status, ProjectStatus::Funded);
}

#[tokio::test]
async fn force_full_funding_on_funded_project_adds_nothing() {
    let store = test_store().await;

    ProjectRepo::force_full_funding(&store, "p1").await.unwrap();
    let again = ProjectRepo::force_full_funding(&store, "p1").await.unwrap();

    assert_eq!(again.current_funding, 250_000.0);
    assert_eq!(again.status, ProjectStatus::Funded);
}

#[tokio::test]
async fn force_full_funding_racing_an_investment_never_overshoots() {
    for _ in 0..8 {
        let store = test_store().await;

        let (invested, forced) = tokio::join!(
            InvestmentRepo::record(&store, "inv1", "p1", 500.0),
            ProjectRepo::force_full_funding(&store, "p1"),
        );

        let forced = forced.unwrap();
        assert_eq!(forced.current_funding, 250_000.0);
        // Either the investment landed first or it found the project closed.
        if let Err(err) = invested {
            assert_matches!(err, DbError::Core(CoreError::Conflict(_)));
        }

        let project = ProjectRepo::find_by_id(&store, "p1").await.unwrap();
        assert_eq!(project.current_funding, project.funding_goal);
        assert_eq!(project.status, ProjectStatus::Funded);
    }
}

#[tokio::test]
async fn funding_unknown_project_is_not_found() {
    let store = test_store().await;

    let result = ProjectRepo::add_funding(&store, "missing", 10.0).await;
    assert_matches!(
        result,
        Err(DbError::Core(CoreError::NotFound { entity: "Project", .. }))
    );
}

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_lifecycle_with_tokenization() {
    let store = test_store().await;

    ProjectRepo::update_status(&store, "p3", ProjectStatus::Approved, None)
        .await
        .unwrap();
    let live = ProjectRepo::update_status(
        &store,
        "p3",
        ProjectStatus::Live,
        Some(TokenizationDetails {
            token_supply: 75_000,
            token_symbol: "SLR-P3".into(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(live.token_supply, Some(75_000));
    assert_eq!(live.token_symbol.as_deref(), Some("SLR-P3"));

    let funded = ProjectRepo::add_funding(&store, "p3", 75_000.0).await.unwrap();
    assert_eq!(funded.status, ProjectStatus::Funded);

    let disbursed = ProjectRepo::update_status(&store, "p3", ProjectStatus::Disbursed, None)
        .await
        .unwrap();
    assert_eq!(disbursed.status, ProjectStatus::Disbursed);
}

#[tokio::test]
async fn illegal_transition_is_rejected_and_state_unchanged() {
    let store = test_store().await;

    let result = ProjectRepo::update_status(&store, "p1", ProjectStatus::Disbursed, None).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Conflict(_))));

    let p1 = ProjectRepo::find_by_id(&store, "p1").await.unwrap();
    assert_eq!(p1.status, ProjectStatus::Live);
}

#[tokio::test]
async fn repeating_a_transition_fails_the_second_time() {
    let store = test_store().await;

    ProjectRepo::update_status(&store, "p2", ProjectStatus::Disbursed, None)
        .await
        .unwrap();
    let again = ProjectRepo::update_status(&store, "p2", ProjectStatus::Disbursed, None).await;
    assert_matches!(again, Err(DbError::Core(CoreError::Conflict(_))));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn investors_see_live_funded_and_disbursed_only() {
    let store = test_store().await;

    let visible = ProjectRepo::list_investor_visible(&store, None).await;
    let ids: Vec<&str> = visible.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);

    let live = ProjectRepo::list_investor_visible(&store, Some(ProjectStatus::Live)).await;
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, "p1");
}

#[tokio::test]
async fn list_filters_by_status() {
    let store = test_store().await;

    assert_eq!(ProjectRepo::list(&store, None).await.len(), 3);
    let pending = ProjectRepo::list(&store, Some(ProjectStatus::PendingReview)).await;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "p3");
}

// ---------------------------------------------------------------------------
// Investments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn investment_credits_project_and_is_recorded() {
    let store = test_store().await;

    let (project, investment) = InvestmentRepo::record(&store, "inv1", "p1", 125_000.0)
        .await
        .unwrap();

    assert_eq!(project.status, ProjectStatus::Funded);
    assert_eq!(investment.amount, 125_000.0);
    assert_eq!(investment.project_id, "p1");

    let mine = InvestmentRepo::list_by_investor(&store, "inv1").await;
    assert_eq!(mine, vec![investment.clone()]);
    assert_eq!(InvestmentRepo::list_by_project(&store, "p1").await.len(), 1);
}

#[tokio::test]
async fn investment_into_closed_project_is_rejected() {
    let store = test_store().await;

    let result = InvestmentRepo::record(&store, "inv1", "p2", 500.0).await;
    assert_matches!(result, Err(DbError::Core(CoreError::Conflict(_))));

    let p2 = ProjectRepo::find_by_id(&store, "p2").await.unwrap();
    assert_eq!(p2.current_funding, 1_000_000.0);
    assert!(InvestmentRepo::list_by_investor(&store, "inv1").await.is_empty());
}
