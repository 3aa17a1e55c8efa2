use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    sorted_legislations, Legislation, LinkedOrganisation, MandatoryRegistration, Profession,
    ProfessionId, ProfessionVersion, ProfessionVersionId, Qualification, RegulationType,
};
use crate::register::accounts::UserId;
use crate::register::industries::Industry;
use crate::register::versions::{self, VersionStatus};

/// The effective view of a profession: the head entity's identity overlaid
/// with one version's content. A value type, never a mutation of either input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionPresentation {
    pub profession_id: ProfessionId,
    pub version_id: ProfessionVersionId,
    pub name: String,
    pub slug: Option<String>,
    pub alternate_name: Option<String>,
    pub description: Option<String>,
    pub occupation_locations: Vec<String>,
    pub regulation_type: Option<RegulationType>,
    pub mandatory_registration: Option<MandatoryRegistration>,
    pub reserved_activities: Option<String>,
    pub industries: Vec<Industry>,
    pub qualification: Option<Qualification>,
    pub legislations: Vec<Legislation>,
    pub organisations: Vec<LinkedOrganisation>,
    pub editor: Option<UserId>,
    pub status: VersionStatus,
    pub last_updated: DateTime<Utc>,
}

pub fn with_version(head: &Profession, version: &ProfessionVersion) -> ProfessionPresentation {
    ProfessionPresentation {
        profession_id: head.id,
        version_id: version.id,
        name: head.name.clone(),
        slug: head.slug.clone(),
        alternate_name: version.alternate_name.clone(),
        description: version.description.clone(),
        occupation_locations: version.occupation_locations.clone(),
        regulation_type: version.regulation_type,
        mandatory_registration: version.mandatory_registration,
        reserved_activities: version.reserved_activities.clone(),
        industries: version.industries.clone(),
        qualification: version.qualification.clone(),
        legislations: sorted_legislations(&version.legislations),
        organisations: version.organisations.clone(),
        editor: version.editor,
        status: version.status,
        last_updated: version.updated_at,
    }
}

/// `None` means "no live version": public search must omit the profession.
pub fn with_latest_live_version(head: &Profession) -> Option<ProfessionPresentation> {
    versions::latest_live(&head.versions).map(|version| with_version(head, version))
}

/// Admin listings include in-progress work, so drafts count too.
pub fn with_latest_live_or_draft_version(head: &Profession) -> Option<ProfessionPresentation> {
    versions::latest_live_or_draft(&head.versions).map(|version| with_version(head, version))
}
