use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
};
use http::{HeaderMap, Method, StatusCode, Uri};
use tracing::info;

use crate::{
    article::{parse_id, Article, ArticleError, ArticleStore, TagDateQuery},
    error::RestError,
    http::response::{is_json_content_type, pretty_json},
};

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<ArticleStore>,
}

impl AppState {
    pub fn new(store: Arc<ArticleStore>) -> Self {
        Self { store }
    }
}

/// `POST /articles`
pub async fn create_article(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, RestError> {
    if !is_json_content_type(&headers) {
        return Err(RestError::UnsupportedMediaType);
    }

    let article: Article = serde_json::from_slice(&body)?;
    let id = state.store.insert(article).await?;

    info!("POST request to {} stored article {}", uri, id);

    Ok(StatusCode::OK)
}

/// `GET /articles/{id}`
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Response, RestError> {
    let id = parse_id(&id)?;

    let article = match state.store.get(id).await {
        Some(article) => article,
        None => {
            info!("Article {} not found", id);
            return Err(RestError::ArticleNotFound);
        }
    };

    let response = pretty_json(&article)?;
    info!("GET request to {}", uri);

    Ok(response)
}

/// `GET /tags/{tag}/{yyyymmdd}[/]`
pub async fn get_articles_by_tag_and_date(
    State(state): State<AppState>,
    Path(path): Path<String>,
    uri: Uri,
) -> Result<Response, RestError> {
    let query = TagDateQuery::parse(&path)?;
    let result = state.store.query(&query).await;

    let response = pretty_json(&result)?;
    info!("GET request to {}", uri);

    Ok(response)
}

/// `GET /tags/` carries neither a tag nor a date.
pub async fn missing_tag_and_date() -> RestError {
    RestError::Article(ArticleError::InvalidQueryPath)
}

pub async fn only_post() -> RestError {
    RestError::MethodNotAllowed(Method::POST)
}

pub async fn only_get() -> RestError {
    RestError::MethodNotAllowed(Method::GET)
}
