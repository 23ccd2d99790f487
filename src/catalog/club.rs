//! Clubs.

use serde::{Deserialize, Serialize};

use crate::core::ClubId;

/// A club. Immutable after seeding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    /// Three-letter code, e.g. `SHP`.
    pub short_name: String,
    /// Hex colour, e.g. `#D32F2F`.
    pub primary_color: String,
    pub secondary_color: String,
}

impl Club {
    #[must_use]
    pub fn new(
        id: ClubId,
        name: impl Into<String>,
        short_name: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            short_name: short_name.into(),
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
        }
    }
}
