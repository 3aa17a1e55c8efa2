use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::register::accounts::User;
use crate::register::feedback::Feedback;
use crate::register::industries::Industry;
use crate::register::organisations::{Organisation, OrganisationId};
use crate::register::professions::{
    Legislation, LinkedOrganisation, Profession, ProfessionId, Qualification, RegulationType,
};
use crate::register::repository::{
    FeedbackRepository, OrganisationRepository, ProfessionRepository, RepositoryError,
    UserRepository,
};
use crate::register::versions::VersionStatus;
use crate::register::RegisterService;

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 12, 16, 45, 0).unwrap()
}

#[derive(Default)]
pub(super) struct MemoryProfessions {
    records: Mutex<Vec<Profession>>,
}

impl ProfessionRepository for MemoryProfessions {
    fn insert(&self, profession: Profession) -> Result<Profession, RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        if records.iter().any(|existing| existing.id == profession.id) {
            return Err(RepositoryError::Conflict);
        }
        records.push(profession.clone());
        Ok(profession)
    }

    fn update(&self, profession: Profession) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == profession.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = profession;
        Ok(())
    }

    fn fetch(&self, id: &ProfessionId) -> Result<Option<Profession>, RepositoryError> {
        let records = self.records.lock().expect("lock poisoned");
        Ok(records.iter().find(|existing| existing.id == *id).cloned())
    }

    fn fetch_by_slug(&self, slug: &str) -> Result<Option<Profession>, RepositoryError> {
        let records = self.records.lock().expect("lock poisoned");
        Ok(records
            .iter()
            .find(|existing| existing.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn all(&self) -> Result<Vec<Profession>, RepositoryError> {
        Ok(self.records.lock().expect("lock poisoned").clone())
    }

    fn slug_taken(&self, slug: &str) -> Result<bool, RepositoryError> {
        Ok(self.fetch_by_slug(slug)?.is_some())
    }
}

#[derive(Default)]
pub(super) struct MemoryOrganisations {
    records: Mutex<HashMap<OrganisationId, Organisation>>,
}

impl OrganisationRepository for MemoryOrganisations {
    fn insert(&self, organisation: Organisation) -> Result<Organisation, RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        if records.contains_key(&organisation.id) {
            return Err(RepositoryError::Conflict);
        }
        records.insert(organisation.id, organisation.clone());
        Ok(organisation)
    }

    fn update(&self, organisation: Organisation) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        if !records.contains_key(&organisation.id) {
            return Err(RepositoryError::NotFound);
        }
        records.insert(organisation.id, organisation);
        Ok(())
    }

    fn fetch(&self, id: &OrganisationId) -> Result<Option<Organisation>, RepositoryError> {
        let records = self.records.lock().expect("lock poisoned");
        Ok(records.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<Organisation>, RepositoryError> {
        let records = self.records.lock().expect("lock poisoned");
        let mut all: Vec<Organisation> = records.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

#[derive(Default)]
pub(super) struct MemoryFeedback {
    records: Mutex<Vec<Feedback>>,
}

impl FeedbackRepository for MemoryFeedback {
    fn append(&self, record: Feedback) -> Result<(), RepositoryError> {
        self.records.lock().expect("lock poisoned").push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Feedback>, RepositoryError> {
        Ok(self.records.lock().expect("lock poisoned").clone())
    }
}

#[derive(Default)]
pub(super) struct MemoryUsers {
    records: Mutex<Vec<User>>,
}

impl UserRepository for MemoryUsers {
    fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        if records.iter().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict);
        }
        records.push(user.clone());
        Ok(user)
    }

    fn update(&self, user: User) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().expect("lock poisoned");
        let slot = records
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = user;
        Ok(())
    }

    fn fetch_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let records = self.records.lock().expect("lock poisoned");
        Ok(records
            .iter()
            .find(|existing| existing.email == email)
            .cloned())
    }

    fn fetch_by_external_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let records = self.records.lock().expect("lock poisoned");
        Ok(records
            .iter()
            .find(|existing| existing.external_identifier.as_deref() == Some(identifier))
            .cloned())
    }
}

/// Repository stub that fails every call, for 500-path assertions.
pub(super) struct UnavailableProfessions;

impl ProfessionRepository for UnavailableProfessions {
    fn insert(&self, _: Profession) -> Result<Profession, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _: Profession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _: &ProfessionId) -> Result<Option<Profession>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch_by_slug(&self, _: &str) -> Result<Option<Profession>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn all(&self) -> Result<Vec<Profession>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn slug_taken(&self, _: &str) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn live_organisation(name: &str) -> Organisation {
    let mut organisation = Organisation::new(name);
    let mut version = organisation.new_draft(fixed_now());
    version.status = VersionStatus::Live;
    organisation.versions.push(version);
    organisation
}

pub(super) fn draft_only_organisation(name: &str) -> Organisation {
    let mut organisation = Organisation::new(name);
    let mut version = organisation.new_draft(fixed_now());
    version.status = VersionStatus::Draft;
    organisation.versions.push(version);
    organisation
}

pub(super) fn linked(organisation: &Organisation) -> LinkedOrganisation {
    LinkedOrganisation {
        id: organisation.id,
        name: organisation.name.clone(),
        has_live_version: organisation.has_live_version(),
    }
}

/// A profession with one live version carrying a complete set of sections.
pub(super) fn live_profession(
    name: &str,
    nations: &[&str],
    industry: &Industry,
    organisation: &Organisation,
) -> Profession {
    let mut profession = Profession::new(name);
    let mut version = profession.new_draft(None, fixed_now());
    version.status = VersionStatus::Live;
    fill_sections(&mut version, nations, industry, organisation);
    profession.versions.push(version);
    profession.slug = Some(crate::register::professions::slugify(name));
    profession
}

pub(super) fn fill_sections(
    version: &mut crate::register::professions::ProfessionVersion,
    nations: &[&str],
    industry: &Industry,
    organisation: &Organisation,
) {
    version.description = Some(format!("{} description", version.profession_id));
    version.occupation_locations = nations.iter().map(|code| code.to_string()).collect();
    version.regulation_type = Some(RegulationType::Licensing);
    version.reserved_activities = Some("Reserved activities text.".to_string());
    version.industries = vec![industry.clone()];
    version.qualification = Some(Qualification {
        routes_to_obtain: "Accredited degree.".to_string(),
        url: None,
        uk_recognition: None,
        uk_recognition_url: None,
    });
    version.legislations = vec![Legislation {
        name: "Regulation Act 2000".to_string(),
        url: None,
        index: 1,
    }];
    version.organisations = vec![linked(organisation)];
}

pub(super) fn build_service() -> (
    Arc<RegisterService<MemoryProfessions, MemoryOrganisations>>,
    Arc<MemoryProfessions>,
    Arc<MemoryOrganisations>,
) {
    let professions = Arc::new(MemoryProfessions::default());
    let organisations = Arc::new(MemoryOrganisations::default());
    let service = Arc::new(RegisterService::new(
        professions.clone(),
        organisations.clone(),
    ));
    (service, professions, organisations)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}
