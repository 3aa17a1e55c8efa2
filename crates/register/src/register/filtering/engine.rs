use super::input::FilterInput;
use crate::register::industries::IndustryId;
use crate::register::organisations::OrganisationId;
use crate::register::professions::RegulationType;

/// Extraction hooks a searchable subject provides. Subjects are fully loaded
/// presentations, so every hook can answer without touching a repository.
pub trait FilterSubject {
    fn subject_name(&self) -> &str;
    fn nation_codes(&self) -> Vec<&str>;
    fn organisation_ids(&self) -> Vec<OrganisationId>;
    fn industry_ids(&self) -> Vec<IndustryId>;
    fn regulation_types(&self) -> Vec<RegulationType>;
}

/// Narrows `subjects` to those matching every supplied criterion (AND across
/// criteria, any-overlap within a criterion). Empty criteria pass through,
/// so a default `FilterInput` returns the input unchanged. Relative order is
/// preserved; this is a filter, not a sort.
pub fn apply_filter<S: FilterSubject>(mut subjects: Vec<S>, input: &FilterInput) -> Vec<S> {
    if input.is_empty() {
        return subjects;
    }

    if !input.nations.is_empty() {
        subjects.retain(|subject| {
            subject
                .nation_codes()
                .iter()
                .any(|code| input.nations.iter().any(|nation| nation == code))
        });
    }

    if !input.organisations.is_empty() {
        subjects.retain(|subject| {
            subject
                .organisation_ids()
                .iter()
                .any(|id| input.organisations.contains(id))
        });
    }

    if !input.industries.is_empty() {
        subjects.retain(|subject| {
            subject
                .industry_ids()
                .iter()
                .any(|id| input.industries.contains(id))
        });
    }

    if !input.regulation_types.is_empty() {
        subjects.retain(|subject| {
            subject
                .regulation_types()
                .iter()
                .any(|regulation_type| input.regulation_types.contains(regulation_type))
        });
    }

    let terms = keyword_terms(&input.keywords);
    if !terms.is_empty() {
        subjects.retain(|subject| {
            let name = subject.subject_name().to_lowercase();
            // OR across terms: "Example Yet" matches names containing either.
            terms.iter().any(|term| name.contains(term.as_str()))
        });
    }

    subjects
}

fn keyword_terms(keywords: &str) -> Vec<String> {
    keywords
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
