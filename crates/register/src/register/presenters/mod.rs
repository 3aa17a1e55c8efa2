//! Pure view-model builders: domain data plus translations in, render-ready
//! structures out. Nothing here touches a repository.

pub mod captions;
pub mod checkboxes;
pub mod format;
pub mod rows;
pub mod search;
pub mod translations;

pub use captions::result_caption;
pub use checkboxes::{
    industry_checkbox_items, nation_checkbox_items, organisation_checkbox_items,
    regulation_type_checkbox_items, CheckboxItem,
};
pub use rows::{list_headings, profession_row, ListField, ListRow, ListView};
pub use search::{
    organisation_search_view, profession_search_view, OrganisationResultView, SearchResultsView,
};
pub use translations::Translations;
