use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a profession or organisation version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionStatus {
    Unconfirmed,
    Draft,
    Live,
    Archived,
}

impl VersionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unconfirmed => "Unconfirmed",
            Self::Draft => "Draft",
            Self::Live => "Live",
            Self::Archived => "Archived",
        }
    }

    /// Allowed transitions: unconfirmed -> draft -> live, draft|live -> archived.
    pub const fn can_transition_to(self, next: VersionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Unconfirmed, Self::Draft)
                | (Self::Draft, Self::Live)
                | (Self::Draft, Self::Archived)
                | (Self::Live, Self::Archived)
        )
    }
}

/// Selection hooks every version row provides so "latest live" and
/// "latest live or draft" lookups share one implementation.
pub trait VersionRecord {
    fn status(&self) -> VersionStatus;
    fn updated_at(&self) -> DateTime<Utc>;
    fn sequence(&self) -> u32;
}

/// Picks the authoritative version among those matching `statuses`: maximum
/// `updated_at`, ties broken by the highest `sequence`. Sequence numbers are
/// assigned monotonically per head entity, so the result is deterministic.
pub fn latest_with_status<'a, V: VersionRecord>(
    versions: &'a [V],
    statuses: &[VersionStatus],
) -> Option<&'a V> {
    versions
        .iter()
        .filter(|version| statuses.contains(&version.status()))
        .max_by_key(|version| (version.updated_at(), version.sequence()))
}

pub fn latest_live<V: VersionRecord>(versions: &[V]) -> Option<&V> {
    latest_with_status(versions, &[VersionStatus::Live])
}

pub fn latest_live_or_draft<V: VersionRecord>(versions: &[V]) -> Option<&V> {
    latest_with_status(versions, &[VersionStatus::Live, VersionStatus::Draft])
}
