use serde::{Deserialize, Serialize};

/// A user's reaction to one article.
///
/// Exactly one value is active per (device, article) pair at any time;
/// an absent record is equivalent to `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    #[default]
    None,
    Liked,
    Disliked,
}

impl Reaction {
    /// Whether the user has an active like or dislike.
    pub fn is_active(&self) -> bool {
        !matches!(self, Reaction::None)
    }
}
