use serde::Serialize;

use crate::register::professions::ProfessionVersion;

/// A section of a profession version that must be completed before publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequiredSection {
    Scope,
    RegulatedActivities,
    Qualifications,
    Legislation,
}

impl RequiredSection {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scope => "Scope",
            Self::RegulatedActivities => "Regulated activities",
            Self::Qualifications => "Qualifications",
            Self::Legislation => "Legislation",
        }
    }

    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Scope => "professions.sections.scope",
            Self::RegulatedActivities => "professions.sections.regulatedActivities",
            Self::Qualifications => "professions.sections.qualifications",
            Self::Legislation => "professions.sections.legislation",
        }
    }
}

/// A declarative reason a version cannot yet be published. The gate reports;
/// callers decide how to disable the publish action and word the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PublicationBlocker {
    IncompleteSection { section: RequiredSection },
}

/// Inspects every required section independently; a version missing several
/// sections reports them all, never just the first.
pub fn publication_blockers(version: &ProfessionVersion) -> Vec<PublicationBlocker> {
    let mut blockers = Vec::new();

    if version.industries.is_empty() || version.occupation_locations.is_empty() {
        blockers.push(PublicationBlocker::IncompleteSection {
            section: RequiredSection::Scope,
        });
    }

    let has_description = !is_blank(version.description.as_deref());
    let has_reserved_activities = !is_blank(version.reserved_activities.as_deref());
    if !has_description || version.regulation_type.is_none() || !has_reserved_activities {
        blockers.push(PublicationBlocker::IncompleteSection {
            section: RequiredSection::RegulatedActivities,
        });
    }

    let has_qualification_routes = version
        .qualification
        .as_ref()
        .is_some_and(|qualification| !qualification.routes_to_obtain.trim().is_empty());
    if !has_qualification_routes {
        blockers.push(PublicationBlocker::IncompleteSection {
            section: RequiredSection::Qualifications,
        });
    }

    let has_named_legislation = version
        .legislations
        .first()
        .is_some_and(|legislation| !legislation.name.trim().is_empty());
    if !has_named_legislation {
        blockers.push(PublicationBlocker::IncompleteSection {
            section: RequiredSection::Legislation,
        });
    }

    blockers
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::industries::Industry;
    use crate::register::professions::{
        Legislation, Profession, Qualification, RegulationType,
    };
    use crate::register::versions::VersionStatus;
    use chrono::{TimeZone, Utc};

    fn complete_version() -> ProfessionVersion {
        let profession = Profession::new("Pharmacist");
        let now = Utc.with_ymd_and_hms(2026, 1, 20, 9, 0, 0).unwrap();
        let mut version = profession.new_draft(None, now);
        version.status = VersionStatus::Draft;
        version.description = Some("Dispenses prescription medicines.".to_string());
        version.occupation_locations = vec!["GB-ENG".to_string(), "GB-WLS".to_string()];
        version.regulation_type = Some(RegulationType::Licensing);
        version.reserved_activities = Some("Supply of prescription-only medicines.".to_string());
        version.industries = vec![Industry::new("industries.health")];
        version.qualification = Some(Qualification {
            routes_to_obtain: "MPharm degree plus foundation training.".to_string(),
            url: None,
            uk_recognition: None,
            uk_recognition_url: None,
        });
        version.legislations = vec![Legislation {
            name: "Pharmacy Order 2010".to_string(),
            url: None,
            index: 1,
        }];
        version
    }

    #[test]
    fn complete_version_has_no_blockers() {
        assert!(publication_blockers(&complete_version()).is_empty());
    }

    #[test]
    fn missing_sections_are_reported_independently() {
        let mut version = complete_version();
        version.industries.clear();
        version.description = None;

        let blockers = publication_blockers(&version);
        assert_eq!(
            blockers,
            vec![
                PublicationBlocker::IncompleteSection {
                    section: RequiredSection::Scope,
                },
                PublicationBlocker::IncompleteSection {
                    section: RequiredSection::RegulatedActivities,
                },
            ]
        );
    }

    #[test]
    fn scope_requires_both_industries_and_locations() {
        let mut version = complete_version();
        version.occupation_locations.clear();

        let blockers = publication_blockers(&version);
        assert!(blockers.contains(&PublicationBlocker::IncompleteSection {
            section: RequiredSection::Scope,
        }));
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let mut version = complete_version();
        version.reserved_activities = Some("   ".to_string());

        let blockers = publication_blockers(&version);
        assert_eq!(
            blockers,
            vec![PublicationBlocker::IncompleteSection {
                section: RequiredSection::RegulatedActivities,
            }]
        );
    }

    #[test]
    fn legislation_requires_a_named_first_entry() {
        let mut version = complete_version();
        version.legislations[0].name = String::new();

        let blockers = publication_blockers(&version);
        assert_eq!(
            blockers,
            vec![PublicationBlocker::IncompleteSection {
                section: RequiredSection::Legislation,
            }]
        );

        version.legislations.clear();
        let blockers = publication_blockers(&version);
        assert_eq!(blockers.len(), 1);
    }

    #[test]
    fn qualification_requires_routes_to_obtain() {
        let mut version = complete_version();
        version.qualification = None;

        let blockers = publication_blockers(&version);
        assert_eq!(
            blockers,
            vec![PublicationBlocker::IncompleteSection {
                section: RequiredSection::Qualifications,
            }]
        );
    }
}
