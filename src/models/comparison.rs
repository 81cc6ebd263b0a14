use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::Artist;

/// A taste profile expressed as genre weights over a shared vocabulary.
///
/// Entry `i` is the number of the user's top artists carrying the genre at
/// position `i` of the vocabulary the vector was built against. Two vectors
/// are only comparable when built against the same vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct GenreVector(Vec<u32>);

impl GenreVector {
    /// Creates an all-zero vector of the given dimension
    pub fn zeros(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// Number of dimensions (equals the vocabulary length)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds one unit of weight at the given vocabulary index
    pub fn increment(&mut self, index: usize) {
        self.0[index] += 1;
    }

    /// Genre weights in vocabulary order
    pub fn weights(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for GenreVector {
    fn from(weights: Vec<u32>) -> Self {
        Self(weights)
    }
}

/// Categorical bucket for a similarity percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FriendshipLabel {
    #[serde(rename = "Best Friends")]
    BestFriends,
    #[serde(rename = "Close Friends")]
    CloseFriends,
    Friends,
    Acquaintances,
    Enemies,
}

impl Display for FriendshipLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            FriendshipLabel::BestFriends => "Best Friends",
            FriendshipLabel::CloseFriends => "Close Friends",
            FriendshipLabel::Friends => "Friends",
            FriendshipLabel::Acquaintances => "Acquaintances",
            FriendshipLabel::Enemies => "Enemies",
        };
        write!(f, "{}", label)
    }
}

/// The full outcome of comparing two taste profiles.
///
/// Field names are the wire contract consumed by the presentation layer and
/// must not change. Built fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonResult {
    /// Deduplicated union of both users' top genre labels
    pub merged_genres: Vec<String>,
    /// Genres present in exactly one of the two profiles
    pub merged_sub_genres: Vec<String>,
    /// Union of both users' top artists, deduplicated by artist id
    pub merged_artists: Vec<Artist>,
    pub user1_vector: GenreVector,
    pub user2_vector: GenreVector,
    /// The shared genre vocabulary both vectors are indexed by
    pub all_genres_list: Vec<String>,
    /// Cosine similarity of the two vectors, in [0.0, 1.0]
    pub cosine_similarity: f64,
    pub user1_recommended_artists: Vec<Artist>,
    pub user2_recommended_artists: Vec<Artist>,
    pub friendship_label: FriendshipLabel,
}
