use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Artist;

/// A user's listening snapshot: rank-ordered top artists plus the genre
/// labels derived from them.
///
/// Owned by the caller; the comparison engine only reads it. A profile with
/// no artists or genres is valid input and degrades to a zero vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TasteProfile {
    /// Identifier of the user on the music service
    pub user_id: String,
    /// Top artists, most-listened first
    #[serde(default)]
    pub top_artists: Vec<Artist>,
    /// Top genre labels; may repeat, reflecting how often a genre shows up
    /// across the top artists
    #[serde(default)]
    pub top_genres: Vec<String>,
    /// When the upstream snapshot was taken
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
}

impl TasteProfile {
    /// Creates an empty profile for a user with no listening data
    pub fn empty(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            top_artists: Vec::new(),
            top_genres: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Builds a profile from a top-artist list, deriving `top_genres` by
    /// flattening the artists' genre labels in rank order (duplicates kept)
    pub fn from_artists(user_id: impl Into<String>, top_artists: Vec<Artist>) -> Self {
        let top_genres = top_artists
            .iter()
            .flat_map(|artist| artist.genres.iter().cloned())
            .collect();

        Self {
            user_id: user_id.into(),
            top_artists,
            top_genres,
            fetched_at: Utc::now(),
        }
    }

    /// Checks whether an artist id appears in the user's own top list
    pub fn follows(&self, artist_id: &str) -> bool {
        self.top_artists.iter().any(|a| a.id == artist_id)
    }
}
