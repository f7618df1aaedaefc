pub mod hook;
pub mod model;
pub mod notifier;
pub mod store;

use std::sync::Arc;

use axum::Router;
use pling_core::Module;

use notifier::LikeNotifier;

/// Likes module — notifies a post's owner when someone likes it.
pub struct LikesModule {
    notifier: Arc<LikeNotifier>,
}

impl LikesModule {
    pub fn new(notifier: LikeNotifier) -> Self {
        Self {
            notifier: Arc::new(notifier),
        }
    }
}

impl Module for LikesModule {
    fn name(&self) -> &str {
        "likes"
    }

    fn routes(&self) -> Router {
        hook::router(self.notifier.clone())
    }
}
