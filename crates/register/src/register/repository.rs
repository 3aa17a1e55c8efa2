use crate::register::accounts::User;
use crate::register::feedback::Feedback;
use crate::register::organisations::{Organisation, OrganisationId};
use crate::register::professions::{Profession, ProfessionId};

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProfessionRepository: Send + Sync {
    fn insert(&self, profession: Profession) -> Result<Profession, RepositoryError>;
    fn update(&self, profession: Profession) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProfessionId) -> Result<Option<Profession>, RepositoryError>;
    fn fetch_by_slug(&self, slug: &str) -> Result<Option<Profession>, RepositoryError>;
    fn all(&self) -> Result<Vec<Profession>, RepositoryError>;
    fn slug_taken(&self, slug: &str) -> Result<bool, RepositoryError>;
}

pub trait OrganisationRepository: Send + Sync {
    fn insert(&self, organisation: Organisation) -> Result<Organisation, RepositoryError>;
    fn update(&self, organisation: Organisation) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &OrganisationId) -> Result<Option<Organisation>, RepositoryError>;
    fn all(&self) -> Result<Vec<Organisation>, RepositoryError>;
}

/// Feedback is append-only; there is no update path.
pub trait FeedbackRepository: Send + Sync {
    fn append(&self, record: Feedback) -> Result<(), RepositoryError>;
    fn all(&self) -> Result<Vec<Feedback>, RepositoryError>;
}

pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the email address is already registered.
    fn insert(&self, user: User) -> Result<User, RepositoryError>;
    fn update(&self, user: User) -> Result<(), RepositoryError>;
    fn fetch_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    fn fetch_by_external_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, RepositoryError>;
}
