//! Route registration — module routes + system + admin endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};

use serde::Serialize;

use pling_core::{ListResult, ServiceError};
use pling_docstore::DocStore;

/// Application shared state.
#[derive(Clone)]
pub struct AppState {
    pub docs: Arc<dyn DocStore>,
}

/// Build the complete router with all routes.
pub fn build_router(state: AppState, module_routes: Vec<(&str, Router)>) -> Router {
    // System endpoints (public, no state needed).
    let system_routes = Router::new()
        .route("/health", get(health))
        .route("/version", get(version));

    let mut app: Router = Router::new()
        .nest("/admin/v1", admin_routes())
        .with_state(state)
        .merge(system_routes);

    // Mount each module's routes under /{module_name}. Module routers
    // arrive with their state already applied.
    for (name, router) in module_routes {
        app = app.nest(&format!("/{}", name), router);
    }

    app
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/docs/{collection}", get(list_docs))
        .route(
            "/docs/{collection}/{id}",
            put(put_doc).get(get_doc).delete(delete_doc),
        )
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
    }))
}

async fn version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "plingd",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ---------------------------------------------------------------------------
// Admin document endpoints — seeding and ops for the embedded store.
// In production the upstream app owns these documents; this surface exists
// for self-host setups and local development.
// ---------------------------------------------------------------------------

/// `PUT /admin/v1/docs/{collection}/{id}` — create or replace a document.
async fn put_doc(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
    Json(doc): Json<serde_json::Value>,
) -> Result<StatusCode, ServiceError> {
    let bytes = serde_json::to_vec(&doc).map_err(|e| ServiceError::Internal(e.to_string()))?;
    state
        .docs
        .put(&collection, &id, &bytes)
        .map_err(|e| ServiceError::Storage(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /admin/v1/docs/{collection}/{id}` — fetch a raw document.
async fn get_doc(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let bytes = state
        .docs
        .get(&collection, &id)
        .map_err(|e| ServiceError::Storage(e.to_string()))?
        .ok_or_else(|| ServiceError::NotFound(format!("document {}/{}", collection, id)))?;

    let doc = serde_json::from_slice(&bytes).map_err(|e| ServiceError::Internal(e.to_string()))?;
    Ok(Json(doc))
}

/// One entry in a collection listing.
#[derive(Debug, Serialize)]
struct DocEntry {
    id: String,
    doc: serde_json::Value,
}

/// `GET /admin/v1/docs/{collection}` — list a collection's documents.
async fn list_docs(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<ListResult<DocEntry>>, ServiceError> {
    let docs = state
        .docs
        .list(&collection)
        .map_err(|e| ServiceError::Storage(e.to_string()))?;

    let items = docs
        .into_iter()
        .map(|(id, bytes)| {
            let doc = serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            Ok(DocEntry { id, doc })
        })
        .collect::<Result<Vec<_>, ServiceError>>()?;

    let total = items.len();
    Ok(Json(ListResult { items, total }))
}

/// `DELETE /admin/v1/docs/{collection}/{id}` — remove a document if present.
async fn delete_doc(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<StatusCode, ServiceError> {
    state
        .docs
        .delete(&collection, &id)
        .map_err(|e| ServiceError::Storage(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
