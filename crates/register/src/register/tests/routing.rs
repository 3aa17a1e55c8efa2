use super::common::*;
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::register::feedback::FeedbackService;
use crate::register::industries::Industry;
use crate::register::repository::{OrganisationRepository, ProfessionRepository};
use crate::register::versions::VersionStatus;
use crate::register::{feedback_router, register_router};

fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

fn post_json(uri: &str, payload: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn profession_search_route_returns_caption_and_results() {
    let (service, professions, organisations) = build_service();
    let health = Industry::new("industries.health");
    let organisation = live_organisation("General Medical Council");
    organisations
        .insert(organisation.clone())
        .expect("insert succeeds");
    professions
        .insert(live_profession("Doctor", &["GB-ENG"], &health, &organisation))
        .expect("insert succeeds");

    let router = register_router(service);
    let response = router
        .oneshot(get("/professions/search"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("caption"), Some(&json!("1 profession found")));
    assert_eq!(
        payload["results"][0].get("name"),
        Some(&json!("Doctor"))
    );
}

#[tokio::test]
async fn profession_search_route_applies_comma_separated_nations() {
    let (service, professions, organisations) = build_service();
    let health = Industry::new("industries.health");
    let organisation = live_organisation("General Medical Council");
    organisations
        .insert(organisation.clone())
        .expect("insert succeeds");
    professions
        .insert(live_profession("Doctor", &["GB-ENG"], &health, &organisation))
        .expect("insert succeeds");
    professions
        .insert(live_profession(
            "Teacher",
            &["GB-SCT"],
            &health,
            &organisation,
        ))
        .expect("insert succeeds");

    let router = register_router(service);
    let response = router
        .oneshot(get("/professions/search?nations=GB-SCT,GB-NIR"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let results = payload["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].get("name"), Some(&json!("Teacher")));
}

#[tokio::test]
async fn profession_page_route_returns_not_found_for_unknown_slug() {
    let (service, _, _) = build_service();
    let router = register_router(service);

    let response = router
        .oneshot(get("/professions/missing-profession"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn organisation_search_route_formats_telephone_numbers() {
    let (service, professions, organisations) = build_service();
    let health = Industry::new("industries.health");

    let mut organisation = live_organisation("General Medical Council");
    if let Some(version) = organisation.versions.last_mut() {
        version.telephone = Some("020 7215 5000".to_string());
    }
    organisations
        .insert(organisation.clone())
        .expect("insert succeeds");
    professions
        .insert(live_profession("Doctor", &["GB-ENG"], &health, &organisation))
        .expect("insert succeeds");

    let router = register_router(service);
    let response = router
        .oneshot(get("/regulatory-authorities/search"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["results"][0]["organisation"].get("telephone"),
        Some(&json!("+44 (0)20 7215 5000"))
    );
}

#[tokio::test]
async fn admin_listing_route_returns_headings_and_rows() {
    let (service, professions, organisations) = build_service();
    let health = Industry::new("industries.health");
    let organisation = live_organisation("General Medical Council");
    organisations
        .insert(organisation.clone())
        .expect("insert succeeds");
    professions
        .insert(live_profession("Doctor", &["GB-ENG"], &health, &organisation))
        .expect("insert succeeds");

    let router = register_router(service);
    let response = router
        .oneshot(get("/admin/professions"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let headings = payload["headings"].as_array().expect("headings array");
    assert_eq!(headings[0], json!("Profession"));
    let cells = payload["rows"][0]["cells"].as_array().expect("cells array");
    assert_eq!(cells[0], json!("Doctor"));
    assert_eq!(cells[6], json!("Live"));
}

#[tokio::test]
async fn publish_route_reports_blockers_with_unprocessable_status() {
    let (service, professions, organisations) = build_service();
    let organisation = draft_only_organisation("New regulator");
    organisations
        .insert(organisation.clone())
        .expect("insert succeeds");

    let mut profession = crate::register::professions::Profession::new("Acupuncturist");
    let mut version = profession.new_draft(None, fixed_now());
    version.status = VersionStatus::Draft;
    version.organisations = vec![linked(&organisation)];
    let version_id = version.id;
    profession.versions.push(version);
    let profession = professions.insert(profession).expect("insert succeeds");

    let router = register_router(service);
    let uri = format!(
        "/admin/professions/{}/versions/{}/publish",
        profession.id, version_id
    );
    let response = router
        .oneshot(post_json(&uri, &json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let blockers = payload["blockers"].as_array().expect("blockers array");
    assert_eq!(blockers.len(), 4);
    assert_eq!(
        payload.get("organisationsNotLive"),
        Some(&json!(["New regulator"]))
    );
}

#[tokio::test]
async fn publish_route_returns_not_found_for_unknown_profession() {
    let (service, _, _) = build_service();
    let router = register_router(service);

    let uri = format!(
        "/admin/professions/{}/versions/{}/publish",
        uuid::Uuid::new_v4(),
        uuid::Uuid::new_v4()
    );
    let response = router
        .oneshot(post_json(&uri, &json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn feedback_route_persists_valid_submissions() {
    let repository = Arc::new(MemoryFeedback::default());
    let service = Arc::new(FeedbackService::new(repository.clone()));
    let router = feedback_router(service);

    let response = router
        .oneshot(post_json(
            "/feedback",
            &json!({
                "kind": "feedback",
                "satisfaction": "very-satisfied",
                "improvements": "Nothing, thanks",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("kind"), Some(&json!("feedback")));

    let stored = crate::register::repository::FeedbackRepository::all(repository.as_ref())
        .expect("all succeeds");
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn feedback_route_rejects_incomplete_submissions() {
    let service = Arc::new(FeedbackService::new(Arc::new(MemoryFeedback::default())));
    let router = feedback_router(service);

    let response = router
        .oneshot(post_json(
            "/feedback",
            &json!({
                "kind": "technical-problem",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["errors"]["problemDescription"]["text"]
        .as_str()
        .unwrap_or_default()
        .contains("Describe"));
}

#[tokio::test]
async fn feedback_export_route_serves_csv() {
    let repository = Arc::new(MemoryFeedback::default());
    let service = Arc::new(FeedbackService::new(repository));
    let router = feedback_router(service.clone());

    service
        .submit(
            crate::register::feedback::FeedbackSubmission {
                kind: Some(crate::register::feedback::FeedbackKind::Feedback),
                satisfaction: Some("satisfied".to_string()),
                ..Default::default()
            },
            fixed_now(),
        )
        .expect("submission succeeds");

    let response = router
        .oneshot(get("/feedback/export"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/csv")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 csv");
    assert!(text.starts_with("created,feedbackOrTechnical"));
    assert_eq!(text.lines().count(), 2);
}
