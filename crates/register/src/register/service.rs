use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::register::accounts::UserId;
use crate::register::filtering::{apply_filter, FilterInput, OrganisationSearchResult};
use crate::register::organisations;
use crate::register::professions::{
    self, slugify, ProfessionId, ProfessionPresentation, ProfessionVersion,
    ProfessionVersionId,
};
use crate::register::publication::{publication_blockers, PublicationBlocker};
use crate::register::repository::{OrganisationRepository, ProfessionRepository, RepositoryError};
use crate::register::versions::VersionStatus;

#[derive(Debug, thiserror::Error)]
pub enum RegisterServiceError {
    #[error("profession not found")]
    ProfessionNotFound,
    #[error("profession version not found")]
    VersionNotFound,
    #[error("version cannot be published yet")]
    PublicationBlocked {
        blockers: Vec<PublicationBlocker>,
        organisations_not_live: Vec<String>,
    },
    #[error("cannot move a {from} version to {to}")]
    InvalidStatusTransition {
        from: &'static str,
        to: &'static str,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Application service over the profession and organisation stores. Search
/// queries and the publication workflow both live here so the routers stay
/// thin.
pub struct RegisterService<P, O> {
    professions: Arc<P>,
    organisations: Arc<O>,
}

impl<P, O> RegisterService<P, O>
where
    P: ProfessionRepository,
    O: OrganisationRepository,
{
    pub fn new(professions: Arc<P>, organisations: Arc<O>) -> Self {
        Self {
            professions,
            organisations,
        }
    }

    /// Public search: only professions with a live version, filtered by the
    /// supplied criteria, in repository order.
    pub fn search_professions(
        &self,
        filter: &FilterInput,
    ) -> Result<Vec<ProfessionPresentation>, RegisterServiceError> {
        let candidates: Vec<ProfessionPresentation> = self
            .professions
            .all()?
            .iter()
            .filter_map(professions::with_latest_live_version)
            .collect();

        Ok(apply_filter(candidates, filter))
    }

    /// Public regulator search. Each hit carries the professions the
    /// organisation regulates; nation, industry, and regulation-type criteria
    /// match against that union.
    pub fn search_organisations(
        &self,
        filter: &FilterInput,
    ) -> Result<Vec<OrganisationSearchResult>, RegisterServiceError> {
        let live_professions: Vec<ProfessionPresentation> = self
            .professions
            .all()?
            .iter()
            .filter_map(professions::with_latest_live_version)
            .collect();

        let candidates: Vec<OrganisationSearchResult> = self
            .organisations
            .all()?
            .iter()
            .filter_map(|organisation| {
                let presentation = organisations::with_latest_live_version(organisation)?;
                let regulated = live_professions
                    .iter()
                    .filter(|profession| {
                        profession
                            .organisations
                            .iter()
                            .any(|linked| linked.id == organisation.id)
                    })
                    .cloned()
                    .collect();
                Some(OrganisationSearchResult {
                    organisation: presentation,
                    professions: regulated,
                })
            })
            .collect();

        Ok(apply_filter(candidates, filter))
    }

    /// Admin listing: the latest live or draft view of every profession, so
    /// in-progress work is visible alongside what the public sees. Supports
    /// the same criteria as public search plus a changed-by editor filter.
    pub fn admin_professions(
        &self,
        filter: &FilterInput,
    ) -> Result<Vec<ProfessionPresentation>, RegisterServiceError> {
        let candidates: Vec<ProfessionPresentation> = self
            .professions
            .all()?
            .iter()
            .filter_map(professions::with_latest_live_or_draft_version)
            .collect();

        let mut listing = apply_filter(candidates, filter);
        if !filter.changed_by.is_empty() {
            listing.retain(|presentation| {
                presentation
                    .editor
                    .is_some_and(|editor| filter.changed_by.contains(&editor))
            });
        }

        Ok(listing)
    }

    pub fn find_profession_by_slug(
        &self,
        slug: &str,
    ) -> Result<ProfessionPresentation, RegisterServiceError> {
        let profession = self
            .professions
            .fetch_by_slug(slug)?
            .ok_or(RegisterServiceError::ProfessionNotFound)?;

        professions::with_latest_live_version(&profession)
            .ok_or(RegisterServiceError::ProfessionNotFound)
    }

    /// Opens a new editable version of a profession and persists it.
    pub fn new_draft(
        &self,
        profession_id: &ProfessionId,
        editor: Option<UserId>,
        now: DateTime<Utc>,
    ) -> Result<ProfessionVersion, RegisterServiceError> {
        let mut profession = self
            .professions
            .fetch(profession_id)?
            .ok_or(RegisterServiceError::ProfessionNotFound)?;

        let draft = profession.new_draft(editor, now);
        profession.versions.push(draft.clone());
        self.professions.update(profession)?;

        Ok(draft)
    }

    /// Publishes a draft version: every required section must be complete and
    /// every linked organisation must itself be live. On success the previous
    /// live version is archived and, on first publish, a unique slug is
    /// assigned to the head entity.
    pub fn publish(
        &self,
        profession_id: &ProfessionId,
        version_id: &ProfessionVersionId,
        now: DateTime<Utc>,
    ) -> Result<ProfessionPresentation, RegisterServiceError> {
        let mut profession = self
            .professions
            .fetch(profession_id)?
            .ok_or(RegisterServiceError::ProfessionNotFound)?;

        let version = profession
            .version(version_id)
            .ok_or(RegisterServiceError::VersionNotFound)?;

        let blockers = publication_blockers(version);
        let organisations_not_live = self.organisations_not_live(version)?;
        if !blockers.is_empty() || !organisations_not_live.is_empty() {
            return Err(RegisterServiceError::PublicationBlocked {
                blockers,
                organisations_not_live,
            });
        }

        if !version.status.can_transition_to(VersionStatus::Live) {
            return Err(RegisterServiceError::InvalidStatusTransition {
                from: version.status.label(),
                to: VersionStatus::Live.label(),
            });
        }

        for existing in &mut profession.versions {
            if existing.status == VersionStatus::Live {
                existing.status = VersionStatus::Archived;
                existing.updated_at = now;
            }
        }

        if profession.slug.is_none() {
            profession.slug = Some(self.unique_slug(&profession.name)?);
        }

        let published = {
            let version = profession
                .version_mut(version_id)
                .ok_or(RegisterServiceError::VersionNotFound)?;
            version.status = VersionStatus::Live;
            version.updated_at = now;
            version.clone()
        };

        let presentation = professions::with_version(&profession, &published);
        self.professions.update(profession)?;

        Ok(presentation)
    }

    /// Names of linked organisations without a live version of their own.
    /// Checked against the store, not the snapshot carried on the version.
    fn organisations_not_live(
        &self,
        version: &ProfessionVersion,
    ) -> Result<Vec<String>, RegisterServiceError> {
        let mut not_live = Vec::new();
        for linked in &version.organisations {
            let live = self
                .organisations
                .fetch(&linked.id)?
                .is_some_and(|organisation| organisation.has_live_version());
            if !live {
                not_live.push(linked.name.clone());
            }
        }
        Ok(not_live)
    }

    fn unique_slug(&self, name: &str) -> Result<String, RegisterServiceError> {
        let base = slugify(name);
        if !self.professions.slug_taken(&base)? {
            return Ok(base);
        }

        let mut suffix = 2;
        loop {
            let candidate = format!("{base}-{suffix}");
            if !self.professions.slug_taken(&candidate)? {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }
}
