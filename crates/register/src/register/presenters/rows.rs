use serde::Serialize;

use super::format::format_date;
use super::translations::Translations;
use crate::register::nations::Nation;
use crate::register::professions::ProfessionPresentation;

/// Which admin listing is being rendered. Each view selects a fixed, ordered
/// subset of fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListView {
    Overview,
    SingleOrganisation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListField {
    Profession,
    Nations,
    Industries,
    LastModified,
    ChangedBy,
    Organisations,
    Status,
}

impl ListView {
    pub const fn fields(self) -> &'static [ListField] {
        match self {
            // The single-organisation view drops the regulator column: every
            // row would repeat the page's own organisation.
            Self::Overview => &[
                ListField::Profession,
                ListField::Nations,
                ListField::Industries,
                ListField::LastModified,
                ListField::ChangedBy,
                ListField::Organisations,
                ListField::Status,
            ],
            Self::SingleOrganisation => &[
                ListField::Profession,
                ListField::Nations,
                ListField::Industries,
                ListField::LastModified,
                ListField::ChangedBy,
                ListField::Status,
            ],
        }
    }
}

impl ListField {
    const fn heading_key(self) -> &'static str {
        match self {
            Self::Profession => "professions.admin.tableHeading.profession",
            Self::Nations => "professions.admin.tableHeading.nations",
            Self::Industries => "professions.admin.tableHeading.industries",
            Self::LastModified => "professions.admin.tableHeading.lastModified",
            Self::ChangedBy => "professions.admin.tableHeading.changedBy",
            Self::Organisations => "professions.admin.tableHeading.organisation",
            Self::Status => "professions.admin.tableHeading.status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub cells: Vec<String>,
}

pub fn list_headings(view: ListView, translations: &Translations) -> Vec<String> {
    view.fields()
        .iter()
        .map(|field| translations.get(field.heading_key()).to_string())
        .collect()
}

pub fn profession_row(
    view: ListView,
    presentation: &ProfessionPresentation,
    changed_by: Option<&str>,
    translations: &Translations,
) -> ListRow {
    let cells = view
        .fields()
        .iter()
        .map(|field| match field {
            ListField::Profession => presentation.name.clone(),
            ListField::Nations => presentation
                .occupation_locations
                .iter()
                .map(|code| {
                    Nation::find_by_code(code)
                        .map(|nation| translations.get(nation.name).to_string())
                        .unwrap_or_else(|| code.clone())
                })
                .collect::<Vec<_>>()
                .join(", "),
            ListField::Industries => presentation
                .industries
                .iter()
                .map(|industry| translations.get(&industry.name).to_string())
                .collect::<Vec<_>>()
                .join(", "),
            ListField::LastModified => format_date(presentation.last_updated),
            ListField::ChangedBy => changed_by.unwrap_or_default().to_string(),
            ListField::Organisations => presentation
                .organisations
                .iter()
                .map(|organisation| organisation.name.clone())
                .collect::<Vec<_>>()
                .join(", "),
            ListField::Status => presentation.status.label().to_string(),
        })
        .collect();

    ListRow { cells }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::industries::Industry;
    use crate::register::organisations::OrganisationId;
    use crate::register::professions::{LinkedOrganisation, Profession};
    use crate::register::versions::VersionStatus;
    use chrono::{TimeZone, Utc};

    fn presentation() -> ProfessionPresentation {
        let mut profession = Profession::new("Social worker");
        let now = Utc.with_ymd_and_hms(2026, 8, 12, 10, 0, 0).unwrap();
        let mut version = profession.new_draft(None, now);
        version.status = VersionStatus::Live;
        version.occupation_locations = vec!["GB-ENG".to_string(), "GB-WLS".to_string()];
        version.industries = vec![Industry::new("industries.health")];
        version.organisations = vec![LinkedOrganisation {
            id: OrganisationId::new(),
            name: "Social Work England".to_string(),
            has_live_version: true,
        }];
        profession.versions.push(version);

        crate::register::professions::with_latest_live_version(&profession)
            .expect("live version present")
    }

    #[test]
    fn overview_and_single_organisation_views_differ_by_one_column() {
        let overview = ListView::Overview.fields();
        let single = ListView::SingleOrganisation.fields();

        assert_eq!(overview.len(), single.len() + 1);
        assert!(overview.contains(&ListField::Organisations));
        assert!(!single.contains(&ListField::Organisations));
    }

    #[test]
    fn headings_follow_the_view_field_order() {
        let translations = Translations::en();
        let headings = list_headings(ListView::Overview, &translations);
        assert_eq!(
            headings,
            vec![
                "Profession",
                "Nations",
                "Industries",
                "Last modified",
                "Changed by",
                "Regulators",
                "Status",
            ]
        );
    }

    #[test]
    fn rows_translate_nations_and_format_dates() {
        let translations = Translations::en();
        let row = profession_row(
            ListView::Overview,
            &presentation(),
            Some("beis-editor"),
            &translations,
        );

        assert_eq!(
            row.cells,
            vec![
                "Social worker",
                "England, Wales",
                "Health",
                "12 August 2026",
                "beis-editor",
                "Social Work England",
                "Live",
            ]
        );
    }

    #[test]
    fn single_organisation_rows_omit_the_regulator_cell() {
        let translations = Translations::en();
        let row = profession_row(
            ListView::SingleOrganisation,
            &presentation(),
            None,
            &translations,
        );

        assert_eq!(row.cells.len(), 6);
        assert!(!row.cells.contains(&"Social Work England".to_string()));
        assert_eq!(row.cells[4], "");
    }
}
