mod support;

use std::cell::RefCell;

use serde_json::json;
use triptales_app_state::admin::{
    AdminController, AdminEffect, DELETED_MESSAGE, NOT_FOUND_MESSAGE, SUBMITTED_MESSAGE,
    UPDATED_MESSAGE, run_boot, run_create, run_delete, run_edit, run_review,
};
use triptales_app_state::{ADMIN_FAILURE_REDIRECT_DELAY, LOGIN_PAGE, Redirect};
use triptales_client_core::models::{ItineraryInput, ItineraryStatus};
use triptales_client_core::{ApiClient, HttpMethod, MemoryStore};

use support::{FakeBackend, admin_profile, api, itinerary, list, user_profile};

fn signed_in(backend: FakeBackend) -> anyhow::Result<ApiClient<FakeBackend, MemoryStore>> {
    let api = api(backend);
    api.session().set_token("tok_live")?;
    Ok(api)
}

#[tokio::test]
async fn boot_without_session_redirects_immediately() -> anyhow::Result<()> {
    let api = api(FakeBackend::default());
    let admin = RefCell::new(AdminController::new());

    let redirect = run_boot(&admin, &api, &|| {}).await;

    assert_eq!(redirect, Some(Redirect::now(LOGIN_PAGE)));
    assert!(api.transport().calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn admin_boot_loads_own_list_and_review_queue() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(HttpMethod::Get, "/auth/me", 200, admin_profile())
        .on(
            HttpMethod::Get,
            "/itineraries?mine=true",
            200,
            list(vec![itinerary(1, "Manali Snow Trail", "approved")]),
        )
        .on(
            HttpMethod::Get,
            "/itineraries?status=pending",
            200,
            list(vec![itinerary(2, "Kasol Riverside", "pending")]),
        );
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    assert_eq!(run_boot(&admin, &api, &|| {}).await, None);

    let admin = admin.borrow();
    assert_eq!(admin.session_info(), "Signed in as Admin (admin)");
    assert!(admin.is_review_visible());
    assert_eq!(admin.own_itineraries().len(), 1);
    assert_eq!(admin.review_queue()[0].title, "Kasol Riverside");
    assert!(api.session().user().is_some_and(|user| user.is_admin()));
    assert_eq!(
        api.transport().calls(),
        vec![
            "GET /auth/me",
            "GET /itineraries?mine=true",
            "GET /itineraries?status=pending"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn tables_stay_untouched_until_their_first_load() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(HttpMethod::Get, "/auth/me", 200, admin_profile())
        .on(HttpMethod::Get, "/itineraries?mine=true", 200, list(Vec::new()))
        .on(HttpMethod::Get, "/itineraries?status=pending", 200, list(Vec::new()));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());
    assert!(!admin.borrow().has_loaded_own());

    let painted = RefCell::new(Vec::new());
    let repaint = || {
        let admin = admin.borrow();
        painted
            .borrow_mut()
            .push((admin.has_loaded_own(), admin.has_loaded_review()));
    };
    run_boot(&admin, &api, &repaint).await;

    assert_eq!(
        painted.into_inner(),
        vec![(false, false), (true, false), (true, true)]
    );
    Ok(())
}

#[tokio::test]
async fn regular_user_boot_keeps_review_hidden() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(HttpMethod::Get, "/auth/me", 200, user_profile())
        .on(HttpMethod::Get, "/itineraries?mine=true", 200, list(Vec::new()));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    run_boot(&admin, &api, &|| {}).await;

    assert!(!admin.borrow().is_review_visible());
    assert_eq!(admin.borrow().session_info(), "Signed in as Demo User (user)");
    assert!(!api.transport().calls().iter().any(|call| call.contains("status=pending")));
    Ok(())
}

#[tokio::test]
async fn expired_token_clears_session_and_redirects_after_delay() -> anyhow::Result<()> {
    let backend = FakeBackend::default().on(
        HttpMethod::Get,
        "/auth/me",
        401,
        json!({"detail": "Invalid or expired token"}),
    );
    let api = signed_in(backend)?;
    api.session().set_theme_preference("dark")?;
    let admin = RefCell::new(AdminController::new());

    let redirect = run_boot(&admin, &api, &|| {}).await;

    assert_eq!(
        redirect,
        Some(Redirect::after(LOGIN_PAGE, ADMIN_FAILURE_REDIRECT_DELAY))
    );
    assert_eq!(admin.borrow().message(), "Invalid or expired token");
    assert!(!api.session().has_session());
    assert_eq!(api.session().theme_preference().as_deref(), Some("dark"));
    Ok(())
}

#[tokio::test]
async fn create_resets_form_and_reloads_lists_for_admins() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(HttpMethod::Get, "/auth/me", 200, admin_profile())
        .on(HttpMethod::Post, "/itineraries", 201, json!({"id": 9}))
        .on(HttpMethod::Get, "/itineraries?mine=true", 200, list(Vec::new()))
        .on(
            HttpMethod::Get,
            "/itineraries?mine=true",
            200,
            list(vec![itinerary(9, "Spiti Circuit", "pending")]),
        )
        .on(HttpMethod::Get, "/itineraries?status=pending", 200, list(Vec::new()));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());
    run_boot(&admin, &api, &|| {}).await;

    let effects = run_create(
        &admin,
        &api,
        ItineraryInput {
            title: " Spiti Circuit ".to_string(),
            region: "Himachal".to_string(),
            duration_days: 7,
            budget_min: 25000,
            budget_max: 40000,
            image_url: "../images/spiti.jpg".to_string(),
            details: "Day 1: Shimla.".to_string(),
        },
        &|| {},
    )
    .await;

    assert_eq!(effects, vec![AdminEffect::ResetItineraryForm]);
    assert_eq!(admin.borrow().message(), SUBMITTED_MESSAGE);
    assert_eq!(admin.borrow().own_itineraries()[0].title, "Spiti Circuit");
    assert_eq!(
        api.transport().body_of("POST /itineraries").and_then(|body| body.get("title").cloned()),
        Some(json!("Spiti Circuit"))
    );
    let calls = api.transport().calls();
    assert_eq!(calls.last().map(String::as_str), Some("GET /itineraries?status=pending"));
    Ok(())
}

#[tokio::test]
async fn edit_sends_full_record_with_new_title() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(
            HttpMethod::Get,
            "/itineraries?mine=true",
            200,
            list(vec![itinerary(5, "Manali Snow Trail", "approved")]),
        )
        .on(HttpMethod::Put, "/itineraries/5", 200, json!({"message": "Itinerary updated"}));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    run_edit(&admin, &api, 5, Some("Manali in Winter"), &|| {}).await;

    assert_eq!(admin.borrow().message(), UPDATED_MESSAGE);
    let mut expected = itinerary(5, "Manali Snow Trail", "approved");
    expected["title"] = json!("Manali in Winter");
    assert_eq!(api.transport().body_of("PUT /itineraries/5"), Some(expected));
    Ok(())
}

#[tokio::test]
async fn edit_of_missing_record_reports_not_found() -> anyhow::Result<()> {
    let backend =
        FakeBackend::default().on(HttpMethod::Get, "/itineraries?mine=true", 200, list(Vec::new()));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    run_edit(&admin, &api, 77, Some("Renamed"), &|| {}).await;

    assert_eq!(admin.borrow().message(), NOT_FOUND_MESSAGE);
    assert!(!api.transport().calls().iter().any(|call| call.starts_with("PUT")));
    Ok(())
}

#[tokio::test]
async fn dismissed_prompts_send_nothing() -> anyhow::Result<()> {
    let api = signed_in(FakeBackend::default())?;
    let admin = RefCell::new(AdminController::new());

    run_edit(&admin, &api, 5, None, &|| {}).await;
    run_edit(&admin, &api, 5, Some(""), &|| {}).await;
    run_delete(&admin, &api, 5, false, &|| {}).await;

    assert!(api.transport().calls().is_empty());
    assert_eq!(admin.borrow().message(), "");
    Ok(())
}

#[tokio::test]
async fn confirmed_delete_reloads_own_list() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(HttpMethod::Delete, "/itineraries/5", 200, json!({"message": "Itinerary deleted"}))
        .on(HttpMethod::Get, "/itineraries?mine=true", 200, list(Vec::new()));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    run_delete(&admin, &api, 5, true, &|| {}).await;

    assert_eq!(admin.borrow().message(), DELETED_MESSAGE);
    assert_eq!(
        api.transport().calls(),
        vec!["DELETE /itineraries/5", "GET /itineraries?mine=true"]
    );
    Ok(())
}

#[tokio::test]
async fn review_decision_patches_status_and_reloads_both_tables() -> anyhow::Result<()> {
    let backend = FakeBackend::default()
        .on(HttpMethod::Patch, "/itineraries/2/status", 200, json!({"message": "Status updated"}))
        .on(HttpMethod::Get, "/itineraries?status=pending", 200, list(Vec::new()))
        .on(HttpMethod::Get, "/itineraries?mine=true", 200, list(Vec::new()));
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    run_review(&admin, &api, 2, ItineraryStatus::Rejected, &|| {}).await;

    assert_eq!(admin.borrow().message(), "Marked as rejected.");
    assert_eq!(
        api.transport().body_of("PATCH /itineraries/2/status"),
        Some(json!({"status": "rejected"}))
    );
    assert_eq!(
        api.transport().calls(),
        vec![
            "PATCH /itineraries/2/status",
            "GET /itineraries?status=pending",
            "GET /itineraries?mine=true"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn forbidden_review_shows_detail() -> anyhow::Result<()> {
    let backend = FakeBackend::default().on(
        HttpMethod::Patch,
        "/itineraries/2/status",
        403,
        json!({"detail": "Admin access required"}),
    );
    let api = signed_in(backend)?;
    let admin = RefCell::new(AdminController::new());

    run_review(&admin, &api, 2, ItineraryStatus::Approved, &|| {}).await;

    assert_eq!(admin.borrow().message(), "Admin access required");
    Ok(())
}
