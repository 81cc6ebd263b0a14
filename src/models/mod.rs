mod artist;
mod comparison;
mod taste_profile;

pub use artist::Artist;
pub use comparison::{ComparisonResult, FriendshipLabel, GenreVector};
pub use taste_profile::TasteProfile;
