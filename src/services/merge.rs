use std::collections::{BTreeSet, HashSet};

use crate::models::{Artist, TasteProfile};

/// The merged view of two users' taste profiles
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTaste {
    /// Deduplicated union of both users' top genre labels, sorted
    pub genres: Vec<String>,
    /// Genres present in exactly one profile (the symmetric difference),
    /// sorted; these are the points of divergence between the two users
    pub sub_genres: Vec<String>,
    /// Union of both users' top artists, deduplicated by artist id
    pub artists: Vec<Artist>,
}

/// Merges two taste profiles into shared and divergent components.
///
/// Deduplication keys on stable identity (genre label text, artist id), and
/// genre output is sorted, so swapping the two profiles yields the same
/// genre sets and the same artist membership. Merging a profile with itself
/// returns that profile's own genres and artists with an empty divergence
/// set.
pub fn merge_profiles(profile1: &TasteProfile, profile2: &TasteProfile) -> MergedTaste {
    let genres1: BTreeSet<&str> = profile1.top_genres.iter().map(String::as_str).collect();
    let genres2: BTreeSet<&str> = profile2.top_genres.iter().map(String::as_str).collect();

    let genres = genres1.union(&genres2).map(|g| g.to_string()).collect();
    let sub_genres = genres1
        .symmetric_difference(&genres2)
        .map(|g| g.to_string())
        .collect();

    let mut seen_ids: HashSet<&str> = HashSet::new();
    let mut artists = Vec::new();
    for artist in profile1.top_artists.iter().chain(profile2.top_artists.iter()) {
        if seen_ids.insert(&artist.id) {
            artists.push(artist.clone());
        }
    }

    MergedTaste {
        genres,
        sub_genres,
        artists,
    }
}
