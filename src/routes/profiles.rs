use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{Artist, TasteProfile},
    routes::AppState,
};

/// Body for profile upserts. `top_genres` may be omitted, in which case it
/// is derived from the artists' genre labels in rank order.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    #[serde(default)]
    pub top_artists: Vec<Artist>,
    #[serde(default)]
    pub top_genres: Option<Vec<String>>,
}

/// Stores or replaces a user's taste profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<String>,
    Json(request): Json<UpsertProfileRequest>,
) -> AppResult<StatusCode> {
    let mut profile = TasteProfile::from_artists(&user_id, request.top_artists);
    if let Some(top_genres) = request.top_genres {
        profile.top_genres = top_genres;
    }

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        artist_count = profile.top_artists.len(),
        genre_count = profile.top_genres.len(),
        "Storing taste profile"
    );

    state.profiles.store_profile(profile).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a stored taste profile
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<TasteProfile>> {
    let profile = state
        .profiles
        .profile(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User not found: {}", user_id)))?;
    Ok(Json(profile))
}
