use serde::Serialize;

use super::engine::FilterSubject;
use crate::register::industries::IndustryId;
use crate::register::organisations::{OrganisationId, OrganisationPresentation};
use crate::register::professions::{ProfessionPresentation, RegulationType};

impl FilterSubject for ProfessionPresentation {
    fn subject_name(&self) -> &str {
        &self.name
    }

    fn nation_codes(&self) -> Vec<&str> {
        self.occupation_locations
            .iter()
            .map(String::as_str)
            .collect()
    }

    fn organisation_ids(&self) -> Vec<OrganisationId> {
        self.organisations
            .iter()
            .map(|organisation| organisation.id)
            .collect()
    }

    fn industry_ids(&self) -> Vec<IndustryId> {
        self.industries.iter().map(|industry| industry.id).collect()
    }

    fn regulation_types(&self) -> Vec<RegulationType> {
        self.regulation_type.into_iter().collect()
    }
}

/// An organisation search hit: the organisation's own presentation plus the
/// professions it regulates. Nation, industry, and regulation-type criteria
/// match against the union of the regulated professions' attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganisationSearchResult {
    pub organisation: OrganisationPresentation,
    pub professions: Vec<ProfessionPresentation>,
}

impl FilterSubject for OrganisationSearchResult {
    fn subject_name(&self) -> &str {
        &self.organisation.name
    }

    fn nation_codes(&self) -> Vec<&str> {
        self.professions
            .iter()
            .flat_map(|profession| profession.nation_codes())
            .collect()
    }

    fn organisation_ids(&self) -> Vec<OrganisationId> {
        vec![self.organisation.organisation_id]
    }

    fn industry_ids(&self) -> Vec<IndustryId> {
        self.professions
            .iter()
            .flat_map(|profession| profession.industry_ids())
            .collect()
    }

    fn regulation_types(&self) -> Vec<RegulationType> {
        self.professions
            .iter()
            .flat_map(|profession| profession.regulation_types())
            .collect()
    }
}
