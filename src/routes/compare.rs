use axum::{extract::Query, extract::State, Extension, Json};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{ComparisonResult, TasteProfile},
    routes::AppState,
    services::comparison,
};

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub user1: Option<String>,
    pub user2: Option<String>,
}

/// Handler for the user comparison endpoint.
///
/// Resolves both user ids through the profile provider, then runs the pure
/// comparison engine over the two profiles. Profile resolution is the only
/// fallible part; the engine itself cannot fail on valid profiles.
pub async fn compare_users(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<CompareParams>,
) -> AppResult<Json<ComparisonResult>> {
    let (user1, user2) = match (params.user1, params.user2) {
        (Some(user1), Some(user2)) => (user1, user2),
        _ => return Err(AppError::InvalidInput("Missing user IDs".to_string())),
    };

    tracing::info!(
        request_id = %request_id,
        user1 = %user1,
        user2 = %user2,
        "Processing comparison request"
    );

    let profile1 = resolve_profile(&state, &user1).await?;
    let profile2 = resolve_profile(&state, &user2).await?;

    let result =
        comparison::compare_with_limit(&profile1, &profile2, state.config.max_recommendations);

    tracing::info!(
        request_id = %request_id,
        similarity = result.cosine_similarity,
        label = %result.friendship_label,
        "Comparison completed"
    );

    Ok(Json(result))
}

async fn resolve_profile(state: &AppState, user_id: &str) -> AppResult<TasteProfile> {
    state
        .profiles
        .profile(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User not found: {}", user_id)))
}
