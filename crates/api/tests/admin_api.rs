//! HTTP-level tests for the admin project lifecycle and KYC review.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, get, login, login_admin, login_installer, login_investor, post_empty, post_json,
    put_json,
};
use serde_json::json;

/// Log in as the seeded installer, submit a project and return its id.
async fn submit_project(app: &axum::Router, goal: f64) -> String {
    login_installer(app).await;
    let response = post_json(
        app.clone(),
        "/api/v1/projects",
        json!({
            "title": "Warehouse Roof",
            "summary": "Commercial rooftop array",
            "location": "Denver, CO",
            "fundingGoal": goal,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Project lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_project_lifecycle() {
    let app = common::seeded_app().await;
    let id = submit_project(&app, 80_000.0).await;
    login_admin(&app).await;

    let response = post_empty(app.clone(), &format!("/api/v1/admin/projects/{id}/approve")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "APPROVED");

    let response = post_empty(app.clone(), &format!("/api/v1/admin/projects/{id}/mint")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let minted = body_json(response).await;
    let tail: String = id.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    assert_eq!(minted["data"]["status"], "LIVE");
    assert_eq!(minted["data"]["tokenSupply"], 80_000);
    assert_eq!(minted["data"]["tokenSymbol"], format!("SLR-{}", tail.to_uppercase()));

    let uri = format!("/api/v1/admin/projects/{id}/force-funding");
    let response = post_empty(app.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let funded = body_json(response).await;
    assert_eq!(funded["data"]["status"], "FUNDED");
    assert_eq!(funded["data"]["currentFunding"], 80_000.0);

    let response = post_empty(app.clone(), &format!("/api/v1/admin/projects/{id}/release")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "DISBURSED");

    // Disbursed projects stay visible to investors.
    login_investor(&app).await;
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn minting_twice_is_rejected() {
    let app = common::seeded_app().await;
    login_admin(&app).await;
    post_empty(app.clone(), "/api/v1/admin/projects/p3/approve").await;

    let first = post_empty(app.clone(), "/api/v1/admin/projects/p3/mint").await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = post_empty(app, "/api/v1/admin/projects/p3/mint").await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[tokio::test]
async fn release_from_live_is_rejected() {
    let app = common::seeded_app().await;
    login_admin(&app).await;

    let response = post_empty(app.clone(), "/api/v1/admin/projects/p1/release").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let project = body_json(get(app, "/api/v1/projects/p1").await).await;
    assert_eq!(project["data"]["status"], "LIVE");
}

#[tokio::test]
async fn rejected_project_is_terminal() {
    let app = common::seeded_app().await;
    login_admin(&app).await;

    let response = post_empty(app.clone(), "/api/v1/admin/projects/p3/reject").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["status"], "REJECTED");

    let response = post_empty(app, "/api/v1/admin/projects/p3/approve").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

/// Force-funding an approved (not yet live) project adds the funds but
/// does not change its status.
#[tokio::test]
async fn force_funding_outside_live_keeps_status() {
    let app = common::seeded_app().await;
    login_admin(&app).await;
    post_empty(app.clone(), "/api/v1/admin/projects/p3/approve").await;

    let response = post_empty(app, "/api/v1/admin/projects/p3/force-funding").await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["currentFunding"], 75_000.0);
    assert_eq!(json["data"]["status"], "APPROVED");
}

#[tokio::test]
async fn generic_status_change_follows_transition_table() {
    let app = common::seeded_app().await;
    login_admin(&app).await;

    let response = put_json(
        app.clone(),
        "/api/v1/admin/projects/p3/status",
        json!({ "status": "APPROVED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json(
        app.clone(),
        "/api/v1/admin/projects/p3/status",
        json!({
            "status": "LIVE",
            "tokenization": { "tokenSupply": 75000, "tokenSymbol": "ROOF" },
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["tokenSymbol"], "ROOF");
    assert_eq!(json["data"]["tokenSupply"], 75000);

    let response = put_json(
        app.clone(),
        "/api/v1/admin/projects/p3/status",
        json!({ "status": "PENDING_REVIEW" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = put_json(
        app,
        "/api/v1/admin/projects/p3/status",
        json!({ "status": "PAUSED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_actions_on_unknown_project_return_404() {
    let app = common::seeded_app().await;
    login_admin(&app).await;

    for action in ["approve", "reject", "mint", "force-funding", "release"] {
        let uri = format!("/api/v1/admin/projects/ghost/{action}");
        let response = post_empty(app.clone(), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "action {action}");
    }
}

#[tokio::test]
async fn non_admin_cannot_use_admin_routes() {
    let app = common::seeded_app().await;
    login_installer(&app).await;

    let response = post_empty(app.clone(), "/api/v1/admin/projects/p3/approve").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get(app, "/api/v1/admin/kyc").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// KYC review
// ---------------------------------------------------------------------------

async fn submit_kyc(app: &axum::Router, email: &str) -> String {
    let user = login(app, email, "INSTALLER").await;
    let response = post_json(
        app.clone(),
        "/api/v1/kyc",
        json!({
            "fullName": "Rae Installer",
            "companyName": "Rae Renewables",
            "address": "9 Elm St",
            "registrationNumber": "RR-001",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    user["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn pending_kyc_is_listed_for_admin() {
    let app = common::seeded_app().await;
    let user_id = submit_kyc(&app, "rae@example.com").await;
    login_admin(&app).await;

    let json = body_json(get(app, "/api/v1/admin/kyc").await).await;
    let pending = json["data"].as_array().unwrap();

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0]["id"], user_id.as_str());
    assert_eq!(pending[0]["name"], "Rae Installer");
    assert_eq!(pending[0]["companyName"], "Rae Renewables");
}

#[tokio::test]
async fn rejected_kyc_can_be_resubmitted() {
    let app = common::seeded_app().await;
    let user_id = submit_kyc(&app, "rae@example.com").await;

    login_admin(&app).await;
    let response = put_json(
        app.clone(),
        &format!("/api/v1/admin/kyc/{user_id}"),
        json!({ "status": "REJECTED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["kycStatus"], "REJECTED");

    // Deciding again without a new submission is not allowed.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/admin/kyc/{user_id}"),
        json!({ "status": "APPROVED" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    submit_kyc(&app, "rae@example.com").await;
    let me = body_json(get(app, "/api/v1/auth/me").await).await;
    assert_eq!(me["data"]["kycStatus"], "PENDING");
}

#[tokio::test]
async fn kyc_decision_must_be_approve_or_reject() {
    let app = common::seeded_app().await;
    let user_id = submit_kyc(&app, "rae@example.com").await;
    login_admin(&app).await;

    let response = put_json(
        app,
        &format!("/api/v1/admin/kyc/{user_id}"),
        json!({ "status": "NONE" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn kyc_submission_with_blank_field_returns_400() {
    let app = common::seeded_app().await;
    login(&app, "rae@example.com", "INSTALLER").await;

    let response = post_json(
        app,
        "/api/v1/kyc",
        json!({
            "fullName": "Rae Installer",
            "companyName": "",
            "address": "9 Elm St",
            "registrationNumber": "RR-001",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn approved_installer_cannot_resubmit_kyc() {
    let app = common::seeded_app().await;
    login_installer(&app).await;

    let response = post_json(
        app,
        "/api/v1/kyc",
        json!({
            "fullName": "John Solar",
            "companyName": "SolarFlow Inc.",
            "address": "1 Sun Way",
            "registrationNumber": "SF-1",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
