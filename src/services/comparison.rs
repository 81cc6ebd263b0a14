use crate::models::{ComparisonResult, TasteProfile};
use crate::services::{
    friendship,
    merge::merge_profiles,
    recommend::recommend_artists,
    similarity::cosine_similarity,
    vocabulary::GenreVocabulary,
};

/// Default cap on recommended artists per user, matching the number of
/// artist slots the comparison page displays
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 10;

/// Compares two users' taste profiles.
///
/// Pure and stateless: everything derived here (vocabulary, vectors, merged
/// sets, recommendations, label) is built from the two inputs alone and
/// returned in one [`ComparisonResult`]. Nothing is cached between calls.
pub fn compare(profile1: &TasteProfile, profile2: &TasteProfile) -> ComparisonResult {
    compare_with_limit(profile1, profile2, DEFAULT_MAX_RECOMMENDATIONS)
}

/// [`compare`] with an explicit recommendation cap
pub fn compare_with_limit(
    profile1: &TasteProfile,
    profile2: &TasteProfile,
    max_recommendations: usize,
) -> ComparisonResult {
    // 1. Shared genre vocabulary, rebuilt for this pair
    let vocabulary = GenreVocabulary::build(profile1, profile2);

    // 2. Per-user frequency vectors over that vocabulary
    let user1_vector = vocabulary.vectorize(profile1);
    let user2_vector = vocabulary.vectorize(profile2);

    // 3. Similarity and its friendship bucket
    let similarity = cosine_similarity(&user1_vector, &user2_vector);
    let friendship_label = friendship::classify_similarity(similarity);

    // 4. Merged taste and cross-recommendations
    let merged = merge_profiles(profile1, profile2);
    let user1_recommended_artists = recommend_artists(profile1, profile2, max_recommendations);
    let user2_recommended_artists = recommend_artists(profile2, profile1, max_recommendations);

    tracing::debug!(
        user1 = %profile1.user_id,
        user2 = %profile2.user_id,
        vocabulary_len = vocabulary.len(),
        similarity,
        label = %friendship_label,
        "Computed taste comparison"
    );

    ComparisonResult {
        merged_genres: merged.genres,
        merged_sub_genres: merged.sub_genres,
        merged_artists: merged.artists,
        user1_vector,
        user2_vector,
        all_genres_list: vocabulary.labels().to_vec(),
        cosine_similarity: similarity,
        user1_recommended_artists,
        user2_recommended_artists,
        friendship_label,
    }
}
