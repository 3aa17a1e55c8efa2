pub mod domain;
pub mod projection;

pub use domain::{Organisation, OrganisationId, OrganisationVersion, OrganisationVersionId};
pub use projection::{
    with_latest_live_or_draft_version, with_latest_live_version, with_version,
    OrganisationPresentation,
};
