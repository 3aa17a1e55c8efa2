use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::register::versions::{self, VersionRecord, VersionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganisationId(pub Uuid);

impl OrganisationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrganisationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrganisationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganisationVersionId(pub Uuid);

impl OrganisationVersionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrganisationVersionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrganisationVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A regulatory body. Same head/version pattern as professions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: OrganisationId,
    pub name: String,
    /// Unique among non-null slugs; assigned when the organisation is confirmed.
    pub slug: Option<String>,
    pub versions: Vec<OrganisationVersion>,
}

/// Editable snapshot of an organisation's contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganisationVersion {
    pub id: OrganisationVersionId,
    pub organisation_id: OrganisationId,
    pub status: VersionStatus,
    pub sequence: u32,
    pub alternate_name: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub contact_url: Option<String>,
    pub telephone: Option<String>,
    pub fax: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VersionRecord for OrganisationVersion {
    fn status(&self) -> VersionStatus {
        self.status
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl Organisation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OrganisationId::new(),
            name: name.into(),
            slug: None,
            versions: Vec::new(),
        }
    }

    pub fn has_live_version(&self) -> bool {
        self.versions
            .iter()
            .any(|version| version.status == VersionStatus::Live)
    }

    fn next_sequence(&self) -> u32 {
        self.versions
            .iter()
            .map(OrganisationVersion::sequence)
            .max()
            .map_or(1, |sequence| sequence + 1)
    }

    /// Start a new editable version, copying the latest live or draft
    /// content. Brand new organisations start unconfirmed.
    pub fn new_draft(&self, now: DateTime<Utc>) -> OrganisationVersion {
        let sequence = self.next_sequence();

        match versions::latest_live_or_draft(&self.versions) {
            Some(source) => OrganisationVersion {
                id: OrganisationVersionId::new(),
                status: VersionStatus::Draft,
                sequence,
                created_at: now,
                updated_at: now,
                ..source.clone()
            },
            None => OrganisationVersion {
                id: OrganisationVersionId::new(),
                organisation_id: self.id,
                status: VersionStatus::Unconfirmed,
                sequence,
                alternate_name: None,
                address: None,
                url: None,
                email: None,
                contact_url: None,
                telephone: None,
                fax: None,
                created_at: now,
                updated_at: now,
            },
        }
    }
}
