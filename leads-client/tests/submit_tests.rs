/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! End-to-end tests for the submission client against a live lead API and a
//! mock form relay, both served on ephemeral local ports.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use leads_api::{routes, state::AppState, store::LeadStore};
use leads_client::leads_types::{LeadField, NewLead};
use leads_client::{
    Attachment, Endpoint, LeadForm, LeadSubmitter, SubmitError, SubmitOutcome, SubmitReceipt,
    GENERIC_FAILURE,
};
use serde_json::json;

#[derive(Debug, Clone)]
struct CapturedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    data: Vec<u8>,
}

#[derive(Debug, Default)]
struct Captured {
    accept: Option<String>,
    parts: Vec<CapturedPart>,
}

type Shared = Arc<Mutex<Captured>>;

async fn relay_handler(
    State(seen): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("multipart field") {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.expect("field bytes").to_vec();
        parts.push(CapturedPart {
            name,
            file_name,
            content_type,
            data,
        });
    }

    let mut captured = seen.lock().unwrap();
    captured.accept = headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    captured.parts = parts;
    (StatusCode::OK, Json(json!({ "ok": true })))
}

async fn failing_relay() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "relay down" })),
    )
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_relay() -> (String, Shared) {
    let seen: Shared = Arc::default();
    let app = Router::new()
        .route("/f/test", post(relay_handler))
        .with_state(seen.clone());
    let addr = serve(app).await;
    (format!("http://{addr}/f/test"), seen)
}

async fn spawn_failing_relay() -> String {
    let app = Router::new().route("/f/test", post(failing_relay));
    let addr = serve(app).await;
    format!("http://{addr}/f/test")
}

async fn spawn_api() -> String {
    let app = routes::router().with_state(AppState::new(LeadStore::memory()));
    let addr = serve(app).await;
    format!("http://{addr}")
}

/// An address nothing is listening on.
async fn dead_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn filled_form() -> LeadForm {
    let mut form = LeadForm::new();
    form.set_field(LeadField::FullName, "Jane Doe");
    form.set_field(LeadField::Email, "jane@example.com");
    form.set_field(LeadField::Phone, "6145551234");
    form.set_field(LeadField::Consent, true);
    form
}

fn photo(n: u8) -> Attachment {
    Attachment::new(format!("roof-{n}.jpg"), "image/jpeg", vec![n; 16])
}

// ── Relay ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn relay_receives_fields_and_numbered_photos() {
    let (url, seen) = spawn_relay().await;
    let submitter = LeadSubmitter::new(Endpoint::Relay(url));

    let mut form = filled_form();
    form.set_field(LeadField::Message, "Shingles blew off in the storm");
    form.add_attachments([photo(1), photo(2)]);

    let outcome = form.submit(&submitter).await;
    assert_eq!(outcome, SubmitOutcome::Submitted(SubmitReceipt::Relayed));

    let captured = seen.lock().unwrap();
    assert_eq!(captured.accept.as_deref(), Some("application/json"));

    let names: Vec<&str> = captured.parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["name", "email", "phone", "message", "consent", "photo_1", "photo_2"]
    );

    let text = |name: &str| {
        let part = captured.parts.iter().find(|p| p.name == name).unwrap();
        String::from_utf8(part.data.clone()).unwrap()
    };
    assert_eq!(text("name"), "Jane Doe");
    assert_eq!(text("email"), "jane@example.com");
    assert_eq!(text("phone"), "6145551234");
    assert_eq!(text("message"), "Shingles blew off in the storm");
    assert_eq!(text("consent"), "Yes");

    let second = &captured.parts[6];
    assert_eq!(second.file_name.as_deref(), Some("roof-2.jpg"));
    assert_eq!(second.content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(second.data, vec![2u8; 16]);
}

#[tokio::test]
async fn successful_submit_resets_the_form() {
    let (url, _seen) = spawn_relay().await;
    let submitter = LeadSubmitter::new(Endpoint::Relay(url));

    let mut form = filled_form();
    form.add_attachments([photo(1)]);
    assert!(matches!(
        form.submit(&submitter).await,
        SubmitOutcome::Submitted(_)
    ));

    assert_eq!(form.text(LeadField::FullName), "");
    assert!(!form.consent());
    assert!(form.attachments().is_empty());
    assert_eq!(form.failure(), None);
}

#[tokio::test]
async fn relay_error_status_surfaces_generic_failure() {
    let url = spawn_failing_relay().await;
    let submitter = LeadSubmitter::new(Endpoint::Relay(url));

    let mut form = filled_form();
    form.add_attachments([photo(1)]);
    let outcome = form.submit(&submitter).await;

    assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_FAILURE.to_string()));
    assert_eq!(form.failure(), Some(GENERIC_FAILURE));
    // The user's input survives for a manual retry.
    assert_eq!(form.text(LeadField::FullName), "Jane Doe");
    assert_eq!(form.attachments().len(), 1);
}

#[tokio::test]
async fn relay_error_status_is_reported_to_direct_callers() {
    let url = spawn_failing_relay().await;
    let submitter = LeadSubmitter::new(Endpoint::Relay(url));
    let lead = NewLead {
        full_name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: "6145551234".into(),
        message: None,
        consent: true,
    };

    match submitter.submit(&lead, &[]).await {
        Err(SubmitError::Rejected { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn network_fault_surfaces_generic_failure() {
    let submitter = LeadSubmitter::new(Endpoint::Relay(format!("{}/f/test", dead_address().await)));
    let mut form = filled_form();

    let outcome = form.submit(&submitter).await;
    assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_FAILURE.to_string()));
}

#[tokio::test]
async fn listing_is_not_available_on_relay() {
    let (url, _seen) = spawn_relay().await;
    let submitter = LeadSubmitter::new(Endpoint::Relay(url));
    assert!(matches!(
        submitter.list_leads().await,
        Err(SubmitError::Config(_))
    ));
}

// ── Local API ────────────────────────────────────────────────────────────

#[tokio::test]
async fn local_api_stores_lead_and_lists_it() {
    let base = spawn_api().await;
    let submitter = LeadSubmitter::new(Endpoint::LocalApi(base));

    let mut form = filled_form();
    let stored = match form.submit(&submitter).await {
        SubmitOutcome::Submitted(SubmitReceipt::Stored(lead)) => lead,
        other => panic!("expected stored lead, got {other:?}"),
    };
    assert_eq!(stored.full_name, "Jane Doe");
    assert_eq!(stored.message, "");
    assert!(!stored.id.is_empty());

    let mut second = filled_form();
    second.set_field(LeadField::FullName, "John Roe");
    assert!(matches!(
        second.submit(&submitter).await,
        SubmitOutcome::Submitted(SubmitReceipt::Stored(_))
    ));

    let leads = submitter.list_leads().await.unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].id, stored.id);
    assert_eq!(leads[1].full_name, "John Roe");
}

#[tokio::test]
async fn local_api_drops_attachments() {
    let base = spawn_api().await;
    let submitter = LeadSubmitter::new(Endpoint::LocalApi(base));

    let mut form = filled_form();
    form.add_attachments([photo(1), photo(2)]);
    assert!(matches!(
        form.submit(&submitter).await,
        SubmitOutcome::Submitted(SubmitReceipt::Stored(_))
    ));
}

#[tokio::test]
async fn local_api_revalidates_untrusted_input() {
    let base = spawn_api().await;
    let submitter = LeadSubmitter::new(Endpoint::LocalApi(base));

    // Bypasses the form's own check on purpose.
    let lead = NewLead {
        full_name: "Jane Doe".into(),
        email: "not-an-email".into(),
        phone: "6145551234".into(),
        message: None,
        consent: true,
    };

    match submitter.submit(&lead, &[]).await {
        Err(SubmitError::Validation(message)) => assert!(message.contains("email")),
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(submitter.list_leads().await.unwrap().is_empty());
}

#[tokio::test]
async fn local_api_unreachable_surfaces_generic_failure() {
    let submitter = LeadSubmitter::new(Endpoint::LocalApi(dead_address().await));
    let mut form = filled_form();
    assert_eq!(
        form.submit(&submitter).await,
        SubmitOutcome::Failed(GENERIC_FAILURE.to_string())
    );
}
