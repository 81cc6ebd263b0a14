use std::collections::BTreeMap;

use crate::models::{GenreVector, TasteProfile};

/// Ordered mapping from genre label to vector index for one comparison.
///
/// The vocabulary is the lexicographically sorted union of every genre
/// attached to every top artist of the two profiles being compared. It is
/// rebuilt for each request: indices depend on exactly which two users are
/// involved, so caching one across user pairs would corrupt every vector
/// built against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreVocabulary {
    indices: BTreeMap<String, usize>,
    labels: Vec<String>,
}

impl GenreVocabulary {
    /// Builds the shared vocabulary for a pair of profiles
    pub fn build(profile1: &TasteProfile, profile2: &TasteProfile) -> Self {
        let mut indices = BTreeMap::new();
        for artist in profile1.top_artists.iter().chain(profile2.top_artists.iter()) {
            for genre in &artist.genres {
                indices.entry(genre.clone()).or_insert(0);
            }
        }

        // BTreeMap iterates keys in sorted order; positions become indices
        let mut labels = Vec::with_capacity(indices.len());
        for (position, (genre, index)) in indices.iter_mut().enumerate() {
            *index = position;
            labels.push(genre.clone());
        }

        Self { indices, labels }
    }

    /// Number of distinct genres in the vocabulary
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Genre labels in index order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Vector index of a genre label, if present
    pub fn index_of(&self, genre: &str) -> Option<usize> {
        self.indices.get(genre).copied()
    }

    /// Converts a profile into a genre-frequency vector over this vocabulary.
    ///
    /// Each top artist contributes one unit of weight to every genre it
    /// carries, so weights reflect how many of the user's top artists share a
    /// genre rather than a binary flag. The result always has exactly
    /// `self.len()` entries; a profile with no artists yields all zeros.
    pub fn vectorize(&self, profile: &TasteProfile) -> GenreVector {
        let mut vector = GenreVector::zeros(self.len());
        for artist in &profile.top_artists {
            for genre in &artist.genres {
                if let Some(index) = self.index_of(genre) {
                    vector.increment(index);
                }
            }
        }
        vector
    }
}
