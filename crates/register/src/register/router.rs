use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::register::accounts::UserId;
use crate::register::feedback::{FeedbackService, FeedbackSubmission};
use crate::register::filtering::FilterInput;
use crate::register::industries::IndustryId;
use crate::register::organisations::OrganisationId;
use crate::register::presenters::{
    list_headings, organisation_search_view, profession_row, profession_search_view, ListView,
    Translations,
};
use crate::register::professions::{ProfessionId, ProfessionVersionId, RegulationType};
use crate::register::repository::{
    FeedbackRepository, OrganisationRepository, ProfessionRepository,
};
use crate::register::service::{RegisterService, RegisterServiceError};

/// Search criteria as they arrive on the query string. List-valued
/// parameters are comma separated, e.g. `nations=GB-ENG,GB-WLS`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub keywords: Option<String>,
    pub nations: Option<String>,
    pub organisations: Option<String>,
    pub industries: Option<String>,
    pub regulation_types: Option<String>,
    pub changed_by: Option<String>,
}

impl SearchQuery {
    fn into_filter(self) -> FilterInput {
        FilterInput {
            keywords: self.keywords.unwrap_or_default(),
            nations: split_list(self.nations.as_deref()),
            organisations: split_list(self.organisations.as_deref())
                .iter()
                .filter_map(|value| Uuid::parse_str(value).ok())
                .map(OrganisationId)
                .collect(),
            industries: split_list(self.industries.as_deref())
                .iter()
                .filter_map(|value| Uuid::parse_str(value).ok())
                .map(IndustryId)
                .collect(),
            regulation_types: split_list(self.regulation_types.as_deref())
                .iter()
                .filter_map(|value| RegulationType::from_value(value))
                .collect(),
            changed_by: split_list(self.changed_by.as_deref())
                .iter()
                .filter_map(|value| Uuid::parse_str(value).ok())
                .map(UserId)
                .collect(),
        }
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Router builder exposing the public search pages and the admin listing and
/// publication endpoints.
pub fn register_router<P, O>(service: Arc<RegisterService<P, O>>) -> Router
where
    P: ProfessionRepository + 'static,
    O: OrganisationRepository + 'static,
{
    Router::new()
        .route("/professions/search", get(search_professions_handler::<P, O>))
        .route("/professions/:slug", get(profession_by_slug_handler::<P, O>))
        .route(
            "/regulatory-authorities/search",
            get(search_organisations_handler::<P, O>),
        )
        .route("/admin/professions", get(admin_professions_handler::<P, O>))
        .route(
            "/admin/professions/:profession_id/versions/:version_id/publish",
            post(publish_handler::<P, O>),
        )
        .with_state(service)
}

pub(crate) async fn search_professions_handler<P, O>(
    State(service): State<Arc<RegisterService<P, O>>>,
    Query(query): Query<SearchQuery>,
) -> Response
where
    P: ProfessionRepository + 'static,
    O: OrganisationRepository + 'static,
{
    let filter = query.into_filter();
    match service.search_professions(&filter) {
        Ok(results) => {
            let view = profession_search_view(results, &Translations::en());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn profession_by_slug_handler<P, O>(
    State(service): State<Arc<RegisterService<P, O>>>,
    Path(slug): Path<String>,
) -> Response
where
    P: ProfessionRepository + 'static,
    O: OrganisationRepository + 'static,
{
    match service.find_profession_by_slug(&slug) {
        Ok(presentation) => (StatusCode::OK, axum::Json(presentation)).into_response(),
        Err(RegisterServiceError::ProfessionNotFound) => {
            let payload = json!({
                "error": "profession not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn search_organisations_handler<P, O>(
    State(service): State<Arc<RegisterService<P, O>>>,
    Query(query): Query<SearchQuery>,
) -> Response
where
    P: ProfessionRepository + 'static,
    O: OrganisationRepository + 'static,
{
    let filter = query.into_filter();
    match service.search_organisations(&filter) {
        Ok(results) => {
            let view = organisation_search_view(results, &Translations::en());
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn admin_professions_handler<P, O>(
    State(service): State<Arc<RegisterService<P, O>>>,
    Query(query): Query<SearchQuery>,
) -> Response
where
    P: ProfessionRepository + 'static,
    O: OrganisationRepository + 'static,
{
    let translations = Translations::en();
    let filter = query.into_filter();
    match service.admin_professions(&filter) {
        Ok(presentations) => {
            let rows: Vec<_> = presentations
                .iter()
                .map(|presentation| {
                    profession_row(ListView::Overview, presentation, None, &translations)
                })
                .collect();
            let payload = json!({
                "headings": list_headings(ListView::Overview, &translations),
                "rows": rows,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn publish_handler<P, O>(
    State(service): State<Arc<RegisterService<P, O>>>,
    Path((profession_id, version_id)): Path<(Uuid, Uuid)>,
) -> Response
where
    P: ProfessionRepository + 'static,
    O: OrganisationRepository + 'static,
{
    let profession_id = ProfessionId(profession_id);
    let version_id = ProfessionVersionId(version_id);

    match service.publish(&profession_id, &version_id, Utc::now()) {
        Ok(presentation) => (StatusCode::OK, axum::Json(presentation)).into_response(),
        Err(RegisterServiceError::ProfessionNotFound | RegisterServiceError::VersionNotFound) => {
            let payload = json!({
                "error": "profession or version not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(RegisterServiceError::PublicationBlocked {
            blockers,
            organisations_not_live,
        }) => {
            let payload = json!({
                "error": "version cannot be published yet",
                "blockers": blockers,
                "organisationsNotLive": organisations_not_live,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RegisterServiceError::InvalidStatusTransition { from, to }) => {
            let payload = json!({
                "error": format!("cannot move a {from} version to {to}"),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

/// Router builder for the public feedback form and the admin export.
pub fn feedback_router<F>(service: Arc<FeedbackService<F>>) -> Router
where
    F: FeedbackRepository + 'static,
{
    Router::new()
        .route("/feedback", post(submit_feedback_handler::<F>))
        .route("/feedback/export", get(export_feedback_handler::<F>))
        .with_state(service)
}

pub(crate) async fn submit_feedback_handler<F>(
    State(service): State<Arc<FeedbackService<F>>>,
    axum::Json(submission): axum::Json<FeedbackSubmission>,
) -> Response
where
    F: FeedbackRepository + 'static,
{
    use crate::register::feedback::SubmitFeedbackError;

    match service.submit(submission, Utc::now()) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(SubmitFeedbackError::Validation(errors)) => {
            let payload = json!({
                "errors": errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn export_feedback_handler<F>(
    State(service): State<Arc<FeedbackService<F>>>,
) -> Response
where
    F: FeedbackRepository + 'static,
{
    match service.export() {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv")],
            csv,
        )
            .into_response(),
        Err(error) => internal_error(error),
    }
}

fn internal_error(error: impl std::fmt::Display) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
