use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::catalog::ListingCatalog;
use super::criteria::RawFilterCriteria;
use super::domain::{PropertyId, PropertyRecord};

/// Search results as rendered by the browse page.
#[derive(Debug, Serialize)]
pub struct SearchResultsView<'a> {
    pub count: usize,
    pub properties: Vec<&'a PropertyRecord>,
}

/// Router builder exposing listing search and detail endpoints.
pub fn listing_router(catalog: Arc<ListingCatalog>) -> Router {
    Router::new()
        .route("/api/v1/properties", get(search_handler))
        .route("/api/v1/properties/:property_id", get(detail_handler))
        .with_state(catalog)
}

pub(crate) async fn search_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    query: Result<Query<RawFilterCriteria>, QueryRejection>,
) -> Response {
    let Query(raw) = match query {
        Ok(query) => query,
        Err(rejection) => {
            let payload = json!({ "error": rejection.body_text() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let criteria = match raw.normalize() {
        Ok(criteria) => criteria,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    let properties = catalog.search(&criteria);
    let view = SearchResultsView {
        count: properties.len(),
        properties,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn detail_handler(
    State(catalog): State<Arc<ListingCatalog>>,
    Path(property_id): Path<String>,
) -> Response {
    let id = PropertyId(property_id);
    match catalog.get(&id) {
        Some(listing) => (StatusCode::OK, Json(listing)).into_response(),
        None => {
            let payload = json!({
                "error": format!("property {id} not found"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
