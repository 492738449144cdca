use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::database::DocumentStore;
use crate::handlers;
use crate::middleware;

/// Shared application state injected into all handlers via axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

/// Builds the router with every route group, middleware and shared state.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .merge(common_routes())
        .merge(models_routes())
        .merge(chats_routes())
        .merge(letters_routes())
        .method_not_allowed_fallback(handlers::system::method_not_allowed)
        .fallback(handlers::system::not_found)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(CatchPanicLayer::custom(middleware::panic_response));

    if config.security.enable_cors {
        router = router.layer(middleware::cors_layer(&config.security));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn common_routes() -> Router<AppState> {
    use handlers::common;

    Router::new()
        .route(
            "/common/users",
            post(common::create_user)
                .get(common::get_user)
                .put(common::update_user)
                .delete(common::delete_user),
        )
        // Deprecated
        .route(
            "/common/babies",
            post(common::create_baby)
                .get(common::get_babies)
                .put(common::update_baby)
                .delete(common::delete_baby),
        )
}

fn models_routes() -> Router<AppState> {
    use handlers::models;

    Router::new()
        .route(
            "/models/images",
            post(models::create_image)
                .get(models::get_image)
                .delete(models::delete_image),
        )
        .route(
            "/models/music",
            post(models::create_music)
                .get(models::get_music)
                .delete(models::delete_music),
        )
}

fn chats_routes() -> Router<AppState> {
    use handlers::chats;

    Router::new()
        .route("/chats", post(chats::create))
        .route("/chats/", post(chats::create))
        .route("/chats/:user_id", get(chats::list))
        .route("/chats/:user_id/:chat_id", get(chats::get).delete(chats::delete))
}

fn letters_routes() -> Router<AppState> {
    use handlers::letters;

    Router::new()
        .route("/letters", post(letters::create))
        .route("/letters/", post(letters::create))
        .route("/letters/:user_id", get(letters::list))
        .route("/letters/:user_id/:letter_id", get(letters::get).delete(letters::delete))
}
