use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Organisation, OrganisationId, OrganisationVersion, OrganisationVersionId};
use crate::register::versions::{self, VersionStatus};

/// Effective view of an organisation: head identity plus one version's
/// contact details. Telephone numbers are stored raw; presenters format them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganisationPresentation {
    pub organisation_id: OrganisationId,
    pub version_id: OrganisationVersionId,
    pub name: String,
    pub slug: Option<String>,
    pub alternate_name: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
    pub contact_url: Option<String>,
    pub telephone: Option<String>,
    pub fax: Option<String>,
    pub status: VersionStatus,
    pub last_updated: DateTime<Utc>,
}

pub fn with_version(
    head: &Organisation,
    version: &OrganisationVersion,
) -> OrganisationPresentation {
    OrganisationPresentation {
        organisation_id: head.id,
        version_id: version.id,
        name: head.name.clone(),
        slug: head.slug.clone(),
        alternate_name: version.alternate_name.clone(),
        address: version.address.clone(),
        url: version.url.clone(),
        email: version.email.clone(),
        contact_url: version.contact_url.clone(),
        telephone: version.telephone.clone(),
        fax: version.fax.clone(),
        status: version.status,
        last_updated: version.updated_at,
    }
}

pub fn with_latest_live_version(head: &Organisation) -> Option<OrganisationPresentation> {
    versions::latest_live(&head.versions).map(|version| with_version(head, version))
}

pub fn with_latest_live_or_draft_version(head: &Organisation) -> Option<OrganisationPresentation> {
    versions::latest_live_or_draft(&head.versions).map(|version| with_version(head, version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 18, 11, 0, 0).unwrap()
    }

    #[test]
    fn projection_prefers_newest_live_version() {
        let mut organisation = Organisation::new("Architects Registration Board");

        let mut older = organisation.new_draft(now());
        older.status = VersionStatus::Live;
        older.email = Some("old@arb.org.uk".to_string());
        organisation.versions.push(older);

        let mut newer = organisation.new_draft(now() + Duration::days(2));
        newer.status = VersionStatus::Live;
        newer.email = Some("info@arb.org.uk".to_string());
        newer.updated_at = now() + Duration::days(2);
        organisation.versions.push(newer);

        let presentation = with_latest_live_version(&organisation).expect("live version exists");
        assert_eq!(presentation.email.as_deref(), Some("info@arb.org.uk"));
    }

    #[test]
    fn unconfirmed_only_organisation_has_no_presentation() {
        let mut organisation = Organisation::new("New regulator");
        let unconfirmed = organisation.new_draft(now());
        organisation.versions.push(unconfirmed);

        assert!(with_latest_live_version(&organisation).is_none());
        assert!(with_latest_live_or_draft_version(&organisation).is_none());
    }
}
