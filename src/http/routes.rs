use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::handlers::{
    create_article, get_article, get_articles_by_tag_and_date, missing_tag_and_date, only_get,
    only_post, AppState,
};

/// Build the service router. Paths not listed here answer 404; listed paths
/// answer 405 with an `Allow` header for any other method.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/articles", post(create_article).fallback(only_post))
        .route("/articles/{id}", get(get_article).fallback(only_get))
        .route("/tags/", get(missing_tag_and_date).fallback(only_get))
        .route(
            "/tags/{*path}",
            get(get_articles_by_tag_and_date).fallback(only_get),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
