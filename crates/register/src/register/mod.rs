//! The register of regulated professions: reference data, the
//! entity/version model, search filtering, publication gating, and the
//! presenters and routers that expose them.

pub mod accounts;
pub mod decisions;
pub mod feedback;
pub mod filtering;
pub mod industries;
pub mod nations;
pub mod organisations;
pub mod presenters;
pub mod professions;
pub mod publication;
pub mod repository;
pub mod router;
pub mod service;
pub mod telephone;
pub mod versions;

#[cfg(test)]
mod tests;

pub use filtering::{apply_filter, FilterInput, FilterSubject};
pub use publication::{publication_blockers, PublicationBlocker, RequiredSection};
pub use repository::{
    FeedbackRepository, OrganisationRepository, ProfessionRepository, RepositoryError,
    UserRepository,
};
pub use router::{feedback_router, register_router};
pub use service::{RegisterService, RegisterServiceError};
pub use versions::VersionStatus;
