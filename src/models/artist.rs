use serde::{Deserialize, Serialize};

/// An artist from a user's top-listened list, as reported by the upstream
/// music data source. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Stable upstream identifier (e.g. the Spotify artist ID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Genre labels attached to the artist, in upstream order
    #[serde(default)]
    pub genres: Vec<String>,
    /// Position in the owner's top-artist list (0 = most listened)
    pub rank: usize,
    /// Link to the artist's page on the music service
    #[serde(default)]
    pub external_url: Option<String>,
    /// Artist image, when the upstream response carried one
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Artist {
    /// Creates an artist with the given identity, genres and list position
    pub fn new(id: impl Into<String>, name: impl Into<String>, genres: Vec<String>, rank: usize) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genres,
            rank,
            external_url: None,
            image_url: None,
        }
    }

    /// Checks whether the artist carries the given genre label
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_genre() {
        let artist = Artist::new("a1", "Nirvana", vec!["grunge".into(), "rock".into()], 0);
        assert!(artist.has_genre("rock"));
        assert!(!artist.has_genre("jazz"));
    }

    #[test]
    fn test_deserialize_minimal_fields() {
        // Upstream payloads may omit genres and links entirely
        let artist: Artist =
            serde_json::from_str(r#"{"id":"a1","name":"Nirvana","rank":0}"#).unwrap();
        assert!(artist.genres.is_empty());
        assert_eq!(artist.external_url, None);
        assert_eq!(artist.image_url, None);
    }
}
