use serde::{Deserialize, Serialize};

use crate::register::accounts::UserId;
use crate::register::industries::IndustryId;
use crate::register::organisations::OrganisationId;
use crate::register::professions::RegulationType;

/// Request-scoped search criteria. Never persisted; a default value filters
/// nothing out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterInput {
    pub keywords: String,
    /// Nation codes, e.g. `GB-SCT`.
    pub nations: Vec<String>,
    pub organisations: Vec<OrganisationId>,
    pub industries: Vec<IndustryId>,
    pub regulation_types: Vec<RegulationType>,
    /// Editors, admin listing only; public search never sets this.
    pub changed_by: Vec<UserId>,
}

impl FilterInput {
    /// True when no criterion is set; `apply_filter` short-circuits on this.
    pub fn is_empty(&self) -> bool {
        self.keywords.trim().is_empty()
            && self.nations.is_empty()
            && self.organisations.is_empty()
            && self.industries.is_empty()
            && self.regulation_types.is_empty()
            && self.changed_by.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_is_empty() {
        assert!(FilterInput::default().is_empty());
    }

    #[test]
    fn whitespace_only_keywords_still_count_as_empty() {
        let input = FilterInput {
            keywords: "   ".to_string(),
            ..FilterInput::default()
        };
        assert!(input.is_empty());
    }

    #[test]
    fn any_single_criterion_makes_the_input_non_empty() {
        let with_nations = FilterInput {
            nations: vec!["GB-ENG".to_string()],
            ..FilterInput::default()
        };
        assert!(!with_nations.is_empty());

        let with_editor = FilterInput {
            changed_by: vec![UserId::new()],
            ..FilterInput::default()
        };
        assert!(!with_editor.is_empty());
    }
}
