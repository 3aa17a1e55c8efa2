use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndustryId(pub Uuid);

impl IndustryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IndustryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IndustryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Reference entity grouping professions by sector. Rarely mutated; the
/// `name` is a translation key resolved at presentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: IndustryId,
    pub name: String,
}

impl Industry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: IndustryId::new(),
            name: name.into(),
        }
    }

    /// The "Other" catch-all category, which checkbox presenters move to the
    /// end of the list.
    pub fn is_other(&self) -> bool {
        self.name.ends_with(".other")
    }
}
