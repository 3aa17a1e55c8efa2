pub mod domain;
pub mod projection;

pub use domain::{
    slugify, sorted_legislations, Legislation, LinkedOrganisation, MandatoryRegistration,
    Profession, ProfessionId, ProfessionVersion, ProfessionVersionId, Qualification,
    RegulationType,
};
pub use projection::{
    with_latest_live_or_draft_version, with_latest_live_version, with_version,
    ProfessionPresentation,
};
