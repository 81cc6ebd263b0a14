use crate::models::FriendshipLabel;

/// Converts a cosine similarity in [0.0, 1.0] to an integer percentage,
/// rounding half up
pub fn similarity_percentage(similarity: f64) -> u32 {
    (similarity * 100.0).round() as u32
}

/// Maps a similarity percentage to its friendship bucket.
///
/// Thresholds are evaluated highest-first and boundary values belong to the
/// higher bracket: exactly 86 is Best Friends, exactly 85 is Close Friends.
pub fn classify(percentage: u32) -> FriendshipLabel {
    match percentage {
        86.. => FriendshipLabel::BestFriends,
        71.. => FriendshipLabel::CloseFriends,
        51.. => FriendshipLabel::Friends,
        31.. => FriendshipLabel::Acquaintances,
        _ => FriendshipLabel::Enemies,
    }
}

/// Classifies a raw similarity score directly
pub fn classify_similarity(similarity: f64) -> FriendshipLabel {
    classify(similarity_percentage(similarity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(classify(100), FriendshipLabel::BestFriends);
        assert_eq!(classify(86), FriendshipLabel::BestFriends);
        assert_eq!(classify(85), FriendshipLabel::CloseFriends);
        assert_eq!(classify(71), FriendshipLabel::CloseFriends);
        assert_eq!(classify(70), FriendshipLabel::Friends);
        assert_eq!(classify(51), FriendshipLabel::Friends);
        assert_eq!(classify(50), FriendshipLabel::Acquaintances);
        assert_eq!(classify(31), FriendshipLabel::Acquaintances);
        assert_eq!(classify(30), FriendshipLabel::Enemies);
        assert_eq!(classify(0), FriendshipLabel::Enemies);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(similarity_percentage(0.855), 86);
        assert_eq!(similarity_percentage(0.854), 85);
        assert_eq!(similarity_percentage(0.0), 0);
        assert_eq!(similarity_percentage(1.0), 100);
    }

    #[test]
    fn test_classify_similarity_half_overlap() {
        // Cosine 0.5 -> 50% -> just below the Friends bracket
        assert_eq!(classify_similarity(0.5), FriendshipLabel::Acquaintances);
    }
}
