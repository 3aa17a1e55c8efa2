use serde::Serialize;

use super::captions::result_caption;
use super::format::format_link_domain;
use super::translations::Translations;
use crate::register::filtering::OrganisationSearchResult;
use crate::register::organisations::OrganisationPresentation;
use crate::register::professions::ProfessionPresentation;
use crate::register::telephone::format_telephone;

/// Search page view model: a pluralized caption plus the matching results.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResultsView<T: Serialize> {
    pub caption: String,
    pub results: Vec<T>,
}

pub fn profession_search_view(
    results: Vec<ProfessionPresentation>,
    translations: &Translations,
) -> SearchResultsView<ProfessionPresentation> {
    SearchResultsView {
        caption: result_caption(
            results.len(),
            "professions.search.foundSingular",
            "professions.search.foundPlural",
            translations,
        ),
        results,
    }
}

/// One regulator hit: the organisation with its telephone formatted for
/// display, the bare domain of its website, and the professions it regulates.
#[derive(Debug, Clone, Serialize)]
pub struct OrganisationResultView {
    pub organisation: OrganisationPresentation,
    pub link_domain: Option<String>,
    pub professions: Vec<ProfessionPresentation>,
}

pub fn organisation_search_view(
    results: Vec<OrganisationSearchResult>,
    translations: &Translations,
) -> SearchResultsView<OrganisationResultView> {
    let results: Vec<OrganisationResultView> = results
        .into_iter()
        .map(|result| {
            let mut organisation = result.organisation;
            if let Some(telephone) = organisation.telephone.take() {
                organisation.telephone = Some(format_telephone(&telephone));
            }
            let link_domain = organisation.url.as_deref().map(format_link_domain);
            OrganisationResultView {
                organisation,
                link_domain,
                professions: result.professions,
            }
        })
        .collect();

    SearchResultsView {
        caption: result_caption(
            results.len(),
            "organisations.search.foundSingular",
            "organisations.search.foundPlural",
            translations,
        ),
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::professions::Profession;
    use crate::register::versions::VersionStatus;
    use chrono::{TimeZone, Utc};

    fn live_presentation(name: &str) -> ProfessionPresentation {
        let mut profession = Profession::new(name);
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
        let mut version = profession.new_draft(None, now);
        version.status = VersionStatus::Live;
        profession.versions.push(version);
        crate::register::professions::with_latest_live_version(&profession).expect("live")
    }

    #[test]
    fn single_result_uses_singular_caption() {
        let translations = Translations::en();
        let view = profession_search_view(vec![live_presentation("Midwife")], &translations);
        assert_eq!(view.caption, "1 profession found");
        assert_eq!(view.results.len(), 1);
    }

    #[test]
    fn organisation_results_carry_formatted_telephone_and_link_domain() {
        use crate::register::organisations::{self, Organisation};

        let mut organisation = Organisation::new("General Medical Council");
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
        let mut version = organisation.new_draft(now);
        version.status = VersionStatus::Live;
        version.telephone = Some("020 7215 5000".to_string());
        version.url = Some("https://www.gmc-uk.org/registration".to_string());
        organisation.versions.push(version);

        let result = OrganisationSearchResult {
            organisation: organisations::with_latest_live_version(&organisation).expect("live"),
            professions: Vec::new(),
        };

        let view = organisation_search_view(vec![result], &Translations::en());
        assert_eq!(view.caption, "1 regulatory authority found");
        assert_eq!(
            view.results[0].organisation.telephone.as_deref(),
            Some("+44 (0)20 7215 5000")
        );
        assert_eq!(view.results[0].link_domain.as_deref(), Some("gmc-uk.org"));
    }

    #[test]
    fn many_results_use_plural_caption() {
        let translations = Translations::en();
        let view = profession_search_view(
            vec![live_presentation("Midwife"), live_presentation("Nurse")],
            &translations,
        );
        assert_eq!(view.caption, "2 professions found");
    }
}
