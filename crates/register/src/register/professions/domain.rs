use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::register::accounts::UserId;
use crate::register::industries::Industry;
use crate::register::organisations::OrganisationId;
use crate::register::versions::{self, VersionRecord, VersionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessionId(pub Uuid);

impl ProfessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfessionVersionId(pub Uuid);

impl ProfessionVersionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfessionVersionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfessionVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegulationType {
    Licensing,
    Certification,
    Accreditation,
}

impl RegulationType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Licensing, Self::Certification, Self::Accreditation]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Licensing => "Licensing",
            Self::Certification => "Certification",
            Self::Accreditation => "Accreditation",
        }
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Licensing => "licensing",
            Self::Certification => "certification",
            Self::Accreditation => "accreditation",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value.trim() {
            "licensing" => Some(Self::Licensing),
            "certification" => Some(Self::Certification),
            "accreditation" => Some(Self::Accreditation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MandatoryRegistration {
    Mandatory,
    Voluntary,
    Unknown,
}

impl MandatoryRegistration {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mandatory => "Mandatory",
            Self::Voluntary => "Voluntary",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub routes_to_obtain: String,
    pub url: Option<String>,
    pub uk_recognition: Option<String>,
    pub uk_recognition_url: Option<String>,
}

/// A piece of legislation underpinning the regulation of a profession.
/// Display order is the explicit `index`, not insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legislation {
    pub name: String,
    pub url: Option<String>,
    pub index: u32,
}

/// Stable sort on `index`; entries sharing an index keep their relative order.
pub fn sorted_legislations(legislations: &[Legislation]) -> Vec<Legislation> {
    let mut sorted = legislations.to_vec();
    sorted.sort_by_key(|legislation| legislation.index);
    sorted
}

/// Summary of a regulating organisation, loaded alongside the version so the
/// filter engine and publication gate never observe a missing relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedOrganisation {
    pub id: OrganisationId,
    pub name: String,
    pub has_live_version: bool,
}

/// The head entity: stable identity plus its full version history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub id: ProfessionId,
    pub name: String,
    /// Unique among non-null slugs; assigned on first publish.
    pub slug: Option<String>,
    pub versions: Vec<ProfessionVersion>,
}

/// Editable snapshot of a profession's content at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionVersion {
    pub id: ProfessionVersionId,
    pub profession_id: ProfessionId,
    pub editor: Option<UserId>,
    pub status: VersionStatus,
    pub sequence: u32,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    /// Nation codes, e.g. `GB-ENG`.
    pub occupation_locations: Vec<String>,
    pub regulation_type: Option<RegulationType>,
    pub mandatory_registration: Option<MandatoryRegistration>,
    pub reserved_activities: Option<String>,
    pub industries: Vec<Industry>,
    pub qualification: Option<Qualification>,
    pub legislations: Vec<Legislation>,
    pub organisations: Vec<LinkedOrganisation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VersionRecord for ProfessionVersion {
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

impl Profession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProfessionId::new(),
            name: name.into(),
            slug: None,
            versions: Vec::new(),
        }
    }

    pub fn version(&self, id: &ProfessionVersionId) -> Option<&ProfessionVersion> {
        self.versions.iter().find(|version| version.id == *id)
    }

    pub fn version_mut(&mut self, id: &ProfessionVersionId) -> Option<&mut ProfessionVersion> {
        self.versions.iter_mut().find(|version| version.id == *id)
    }

    fn next_sequence(&self) -> u32 {
        self.versions
            .iter()
            .map(ProfessionVersion::sequence)
            .max()
            .map_or(1, |sequence| sequence + 1)
    }

    /// Start a new editable version. Existing content is copied from the
    /// latest live or draft version; a brand new profession starts
    /// unconfirmed with empty content.
    pub fn new_draft(&self, editor: Option<UserId>, now: DateTime<Utc>) -> ProfessionVersion {
        let sequence = self.next_sequence();

        match versions::latest_live_or_draft(&self.versions) {
            Some(source) => ProfessionVersion {
                id: ProfessionVersionId::new(),
                editor,
                status: VersionStatus::Draft,
                sequence,
                created_at: now,
                updated_at: now,
                ..source.clone()
            },
            None => ProfessionVersion {
                id: ProfessionVersionId::new(),
                profession_id: self.id,
                editor,
                status: VersionStatus::Unconfirmed,
                sequence,
                alternate_name: None,
                description: None,
                occupation_locations: Vec::new(),
                regulation_type: None,
                mandatory_registration: None,
                reserved_activities: None,
                industries: Vec::new(),
                qualification: None,
                legislations: Vec::new(),
                organisations: Vec::new(),
                created_at: now,
                updated_at: now,
            },
        }
    }
}

/// Derives a URL slug from a display name: lowercased, runs of
/// non-alphanumerics collapsed to single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut previous_was_hyphen = true;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            previous_was_hyphen = false;
        } else if !previous_was_hyphen {
            slug.push('-');
            previous_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
