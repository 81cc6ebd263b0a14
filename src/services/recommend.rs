use std::cmp::Reverse;
use std::collections::HashSet;

use crate::models::{Artist, TasteProfile};

/// Selects artists from `source`'s top list worth recommending to
/// `recipient`.
///
/// Candidates are the source user's top artists the recipient does not
/// already follow (by artist id). They are ranked by how many of their
/// genres appear in the recipient's own top-genre set, descending, with ties
/// broken by the candidate's original rank in the source profile (earlier
/// rank wins). At most `max` artists are returned; the list is never padded
/// when fewer candidates qualify.
pub fn recommend_artists(
    recipient: &TasteProfile,
    source: &TasteProfile,
    max: usize,
) -> Vec<Artist> {
    let recipient_genres: HashSet<&str> =
        recipient.top_genres.iter().map(String::as_str).collect();

    let mut candidates: Vec<&Artist> = source
        .top_artists
        .iter()
        .filter(|artist| !recipient.follows(&artist.id))
        .collect();

    candidates.sort_by_key(|artist| (Reverse(shared_genre_count(artist, &recipient_genres)), artist.rank));

    candidates.into_iter().take(max).cloned().collect()
}

fn shared_genre_count(artist: &Artist, recipient_genres: &HashSet<&str>) -> usize {
    artist
        .genres
        .iter()
        .filter(|genre| recipient_genres.contains(genre.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: &str, genres: Vec<&str>, rank: usize) -> Artist {
        Artist::new(id, id.to_uppercase(), genres.into_iter().map(String::from).collect(), rank)
    }

    #[test]
    fn test_excludes_artists_already_followed() {
        let recipient = TasteProfile::from_artists("u1", vec![artist("a", vec!["pop"], 0)]);
        let source = TasteProfile::from_artists(
            "u2",
            vec![artist("a", vec!["pop"], 0), artist("b", vec!["pop"], 1)],
        );

        let recommended = recommend_artists(&recipient, &source, 10);
        let ids: Vec<&str> = recommended.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_ranked_by_shared_genre_count() {
        let recipient = TasteProfile::from_artists(
            "u1",
            vec![artist("a", vec!["pop", "rock", "indie"], 0)],
        );
        let source = TasteProfile::from_artists(
            "u2",
            vec![
                artist("b", vec!["jazz"], 0),
                artist("c", vec!["pop", "rock"], 1),
                artist("d", vec!["pop"], 2),
            ],
        );

        let recommended = recommend_artists(&recipient, &source, 10);
        let ids: Vec<&str> = recommended.iter().map(|a| a.id.as_str()).collect();
        // Two shared genres beats one beats zero
        assert_eq!(ids, vec!["c", "d", "b"]);
    }

    #[test]
    fn test_ties_broken_by_source_rank() {
        let recipient = TasteProfile::from_artists("u1", vec![artist("a", vec!["pop"], 0)]);
        let source = TasteProfile::from_artists(
            "u2",
            vec![
                artist("b", vec!["pop"], 0),
                artist("c", vec!["pop"], 1),
                artist("d", vec!["pop"], 2),
            ],
        );

        let recommended = recommend_artists(&recipient, &source, 10);
        let ids: Vec<&str> = recommended.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_capped_at_max_without_padding() {
        let recipient = TasteProfile::empty("u1");
        let source = TasteProfile::from_artists(
            "u2",
            vec![
                artist("b", vec![], 0),
                artist("c", vec![], 1),
                artist("d", vec![], 2),
            ],
        );

        assert_eq!(recommend_artists(&recipient, &source, 2).len(), 2);
        assert_eq!(recommend_artists(&recipient, &source, 10).len(), 3);
    }

    #[test]
    fn test_empty_source_yields_no_recommendations() {
        let recipient = TasteProfile::from_artists("u1", vec![artist("a", vec!["pop"], 0)]);
        let source = TasteProfile::empty("u2");
        assert!(recommend_artists(&recipient, &source, 10).is_empty());
    }
}
