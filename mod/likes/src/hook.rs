use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::{error, info};

use crate::model::LikeCreated;
use crate::notifier::{LikeNotifier, Outcome};

/// Shared hook state.
#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<LikeNotifier>,
}

/// Build the likes event router.
pub fn router(notifier: Arc<LikeNotifier>) -> Router {
    Router::new()
        .nest("/v1", routes())
        .with_state(AppState { notifier })
}

fn routes() -> Router<AppState> {
    Router::new().route("/events", post(like_created))
}

/// `POST /v1/events` — the platform delivers a like-creation event.
///
/// Every well-formed event is acknowledged with 204 no matter how handling
/// went; the outcome is logged exactly once here. The platform retries
/// nothing and must never see a handler fault.
async fn like_created(
    State(state): State<AppState>,
    Json(event): Json<LikeCreated>,
) -> StatusCode {
    match state.notifier.handle(&event).await {
        Ok(Outcome::Sent { owner_id }) => {
            info!("notification sent to {} for like {}", owner_id, event.like_id);
        }
        Ok(Outcome::Skipped(reason)) => {
            info!("no notification for like {}: {}", event.like_id, reason);
        }
        Err(err) => {
            error!("error sending notification for like {}: {}", event.like_id, err);
        }
    }
    StatusCode::NO_CONTENT
}
