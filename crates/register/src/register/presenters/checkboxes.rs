use serde::Serialize;

use super::translations::Translations;
use crate::register::industries::{Industry, IndustryId};
use crate::register::nations::Nation;
use crate::register::organisations::{Organisation, OrganisationId};
use crate::register::professions::RegulationType;

/// One entry of a checkbox group: display text, submitted value, and whether
/// the current filter has it selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckboxItem {
    pub text: String,
    pub value: String,
    pub checked: bool,
}

pub fn nation_checkbox_items(selected: &[String], translations: &Translations) -> Vec<CheckboxItem> {
    Nation::all()
        .iter()
        .map(|nation| CheckboxItem {
            text: translations.get(nation.name).to_string(),
            value: nation.code.to_string(),
            checked: selected.iter().any(|code| code == nation.code),
        })
        .collect()
}

/// Preserves the input order except for the "Other" category, which always
/// renders last.
pub fn industry_checkbox_items(
    all: &[Industry],
    selected: &[IndustryId],
    translations: &Translations,
) -> Vec<CheckboxItem> {
    let to_item = |industry: &Industry| CheckboxItem {
        text: translations.get(&industry.name).to_string(),
        value: industry.id.to_string(),
        checked: selected.contains(&industry.id),
    };

    let mut items: Vec<CheckboxItem> = all
        .iter()
        .filter(|industry| !industry.is_other())
        .map(to_item)
        .collect();
    items.extend(all.iter().filter(|industry| industry.is_other()).map(to_item));
    items
}

pub fn organisation_checkbox_items(
    all: &[Organisation],
    selected: &[OrganisationId],
) -> Vec<CheckboxItem> {
    all.iter()
        .map(|organisation| CheckboxItem {
            text: organisation.name.clone(),
            value: organisation.id.to_string(),
            checked: selected.contains(&organisation.id),
        })
        .collect()
}

pub fn regulation_type_checkbox_items(
    selected: &[RegulationType],
    translations: &Translations,
) -> Vec<CheckboxItem> {
    RegulationType::ordered()
        .iter()
        .map(|regulation_type| CheckboxItem {
            text: translations
                .get(&format!("regulationTypes.{}", regulation_type.value()))
                .to_string(),
            value: regulation_type.value().to_string(),
            checked: selected.contains(regulation_type),
        })
        .collect()
}
