use std::collections::HashMap;

/// Key to display-string lookup. Unknown keys fall back to the key itself so
/// a missing entry degrades visibly instead of panicking.
#[derive(Debug, Clone)]
pub struct Translations {
    entries: HashMap<&'static str, &'static str>,
}

impl Translations {
    pub fn en() -> Self {
        let entries = HashMap::from([
            ("nations.england", "England"),
            ("nations.scotland", "Scotland"),
            ("nations.wales", "Wales"),
            ("nations.northernIreland", "Northern Ireland"),
            ("industries.architecture", "Architecture"),
            ("industries.constructionAndEngineering", "Construction and engineering"),
            ("industries.education", "Education"),
            ("industries.finance", "Finance"),
            ("industries.health", "Health"),
            ("industries.law", "Law"),
            ("industries.other", "Other"),
            ("industries.security", "Security"),
            ("regulationTypes.licensing", "Licensing"),
            ("regulationTypes.certification", "Certification"),
            ("regulationTypes.accreditation", "Accreditation"),
            ("professions.search.foundSingular", "{count} profession found"),
            ("professions.search.foundPlural", "{count} professions found"),
            ("organisations.search.foundSingular", "{count} regulatory authority found"),
            ("organisations.search.foundPlural", "{count} regulatory authorities found"),
            ("professions.sections.scope", "Scope"),
            ("professions.sections.regulatedActivities", "Regulated activities"),
            ("professions.sections.qualifications", "Qualifications"),
            ("professions.sections.legislation", "Legislation"),
            ("professions.admin.tableHeading.profession", "Profession"),
            ("professions.admin.tableHeading.nations", "Nations"),
            ("professions.admin.tableHeading.industries", "Industries"),
            ("professions.admin.tableHeading.lastModified", "Last modified"),
            ("professions.admin.tableHeading.changedBy", "Changed by"),
            ("professions.admin.tableHeading.organisation", "Regulators"),
            ("professions.admin.tableHeading.status", "Status"),
        ]);

        Self { entries }
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).copied().unwrap_or(key)
    }
}
