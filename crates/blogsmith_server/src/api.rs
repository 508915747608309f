//! HTTP API for the content generation service.

use crate::error::ApiError;
use crate::service::{self, ContentService};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router, extract::State};
use blogsmith_core::{GeneratedPost, PostRequest, Thumbnail, ThumbnailRequest};
use blogsmith_models::{ImageGateway, TextGateway};
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// Creates the API router.
///
/// Generation endpoints accept POST only; any other method gets a 405 with a
/// JSON error body and never touches a gateway.
pub fn create_router<T, I>(service: Arc<ContentService<T, I>>) -> Router
where
    T: TextGateway + 'static,
    I: ImageGateway + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/generate-blog-post",
            post(generate_blog_post::<T, I>).fallback(method_not_allowed),
        )
        .route(
            "/generate-thumbnail",
            post(generate_thumbnail::<T, I>).fallback(method_not_allowed),
        )
        .route(
            "/generate-audience",
            post(generate_audience).fallback(method_not_allowed),
        )
        .route(
            "/generate-keywords",
            post(generate_keywords).fallback(method_not_allowed),
        )
        .route(
            "/cron-generate-daily-post",
            post(cron_generate_daily_post::<T, I>).fallback(method_not_allowed),
        )
        .with_state(service)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Draft a blog post from the request body.
#[instrument(skip_all)]
async fn generate_blog_post<T, I>(
    State(service): State<Arc<ContentService<T, I>>>,
    Json(request): Json<PostRequest>,
) -> Result<Json<GeneratedPost>, ApiError>
where
    T: TextGateway + 'static,
    I: ImageGateway + 'static,
{
    Ok(Json(service.draft_post(&request).await?))
}

/// Draft a thumbnail from the request body.
#[instrument(skip_all)]
async fn generate_thumbnail<T, I>(
    State(service): State<Arc<ContentService<T, I>>>,
    Json(request): Json<ThumbnailRequest>,
) -> Result<Json<Thumbnail>, ApiError>
where
    T: TextGateway + 'static,
    I: ImageGateway + 'static,
{
    Ok(Json(service.draft_thumbnail(&request).await?))
}

/// Fixed audience suggestions.
#[instrument(skip_all)]
async fn generate_audience() -> impl IntoResponse {
    (StatusCode::OK, Json(service::audience_suggestions()))
}

/// Fixed keyword suggestions.
#[instrument(skip_all)]
async fn generate_keywords() -> impl IntoResponse {
    (StatusCode::OK, Json(service::keyword_suggestions()))
}

/// Draft the scheduled daily post; the request body is ignored.
#[instrument(skip_all)]
async fn cron_generate_daily_post<T, I>(
    State(service): State<Arc<ContentService<T, I>>>,
) -> Result<Json<GeneratedPost>, ApiError>
where
    T: TextGateway + 'static,
    I: ImageGateway + 'static,
{
    Ok(Json(service.daily_post().await?))
}
