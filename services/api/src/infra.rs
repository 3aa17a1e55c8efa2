use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use regulated_professions::register::accounts::{RegistrationFlow, Role, User};
use regulated_professions::register::feedback::Feedback;
use regulated_professions::register::industries::Industry;
use regulated_professions::register::organisations::{Organisation, OrganisationId};
use regulated_professions::register::professions::{
    Legislation, LinkedOrganisation, MandatoryRegistration, Profession, ProfessionId,
    Qualification, RegulationType,
};
use regulated_professions::register::repository::{
    FeedbackRepository, OrganisationRepository, ProfessionRepository, RepositoryError,
    UserRepository,
};
use regulated_professions::register::versions::VersionStatus;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfessionRepository {
    records: Arc<Mutex<Vec<Profession>>>,
}

impl ProfessionRepository for InMemoryProfessionRepository {
    fn insert(&self, profession: Profession) -> Result<Profession, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == profession.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(profession.clone());
        Ok(profession)
    }

    fn update(&self, profession: Profession) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == profession.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = profession;
        Ok(())
    }

    fn fetch(&self, id: &ProfessionId) -> Result<Option<Profession>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| existing.id == *id).cloned())
    }

    fn fetch_by_slug(&self, slug: &str) -> Result<Option<Profession>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|existing| existing.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn all(&self) -> Result<Vec<Profession>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }

    fn slug_taken(&self, slug: &str) -> Result<bool, RepositoryError> {
        Ok(self.fetch_by_slug(slug)?.is_some())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryOrganisationRepository {
    records: Arc<Mutex<Vec<Organisation>>>,
}

impl OrganisationRepository for InMemoryOrganisationRepository {
    fn insert(&self, organisation: Organisation) -> Result<Organisation, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == organisation.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(organisation.clone());
        Ok(organisation)
    }

    fn update(&self, organisation: Organisation) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == organisation.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = organisation;
        Ok(())
    }

    fn fetch(&self, id: &OrganisationId) -> Result<Option<Organisation>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|existing| existing.id == *id).cloned())
    }

    fn all(&self) -> Result<Vec<Organisation>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryFeedbackRepository {
    records: Arc<Mutex<Vec<Feedback>>>,
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    fn append(&self, record: Feedback) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<Feedback>, RepositoryError> {
        Ok(self.records.lock().expect("repository mutex poisoned").clone())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryUserRepository {
    records: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: User) -> Result<User, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.email == user.email) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(user.clone());
        Ok(user)
    }

    fn update(&self, user: User) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == user.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = user;
        Ok(())
    }

    fn fetch_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|existing| existing.email == email)
            .cloned())
    }

    fn fetch_by_external_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|existing| existing.external_identifier.as_deref() == Some(identifier))
            .cloned())
    }
}

fn live_organisation(
    name: &str,
    email: &str,
    url: &str,
    telephone: &str,
) -> Organisation {
    let now = Utc::now();
    let mut organisation = Organisation::new(name);
    let mut version = organisation.new_draft(now);
    version.status = VersionStatus::Live;
    version.email = Some(email.to_string());
    version.url = Some(url.to_string());
    version.telephone = Some(telephone.to_string());
    organisation.versions.push(version);
    organisation
}

struct SeedProfession<'a> {
    name: &'a str,
    nations: &'a [&'a str],
    industry: &'a Industry,
    regulation_type: RegulationType,
    description: &'a str,
    reserved_activities: &'a str,
    routes_to_obtain: &'a str,
    legislation: &'a str,
    organisation: &'a Organisation,
}

fn live_profession(seed: SeedProfession<'_>) -> Profession {
    let now = Utc::now();
    let mut profession = Profession::new(seed.name);
    profession.slug = Some(regulated_professions::register::professions::slugify(
        seed.name,
    ));

    let mut version = profession.new_draft(None, now);
    version.status = VersionStatus::Live;
    version.description = Some(seed.description.to_string());
    version.occupation_locations = seed.nations.iter().map(|code| code.to_string()).collect();
    version.regulation_type = Some(seed.regulation_type);
    version.mandatory_registration = Some(MandatoryRegistration::Mandatory);
    version.reserved_activities = Some(seed.reserved_activities.to_string());
    version.industries = vec![seed.industry.clone()];
    version.qualification = Some(Qualification {
        routes_to_obtain: seed.routes_to_obtain.to_string(),
        url: None,
        uk_recognition: None,
        uk_recognition_url: None,
    });
    version.legislations = vec![Legislation {
        name: seed.legislation.to_string(),
        url: None,
        index: 1,
    }];
    version.organisations = vec![LinkedOrganisation {
        id: seed.organisation.id,
        name: seed.organisation.name.clone(),
        has_live_version: true,
    }];
    profession.versions.push(version);

    profession
}

/// Populates the stores with a small, recognisable register so local search
/// and admin pages have data to work with.
pub(crate) fn seed_register<P, O>(professions: &P, organisations: &O) -> Result<(), RepositoryError>
where
    P: ProfessionRepository,
    O: OrganisationRepository,
{
    let health = Industry::new("industries.health");
    let law = Industry::new("industries.law");
    let architecture = Industry::new("industries.architecture");

    let gmc = organisations.insert(live_organisation(
        "General Medical Council",
        "gmc@gmc-uk.org",
        "https://www.gmc-uk.org",
        "0161 923 6602",
    ))?;
    let sra = organisations.insert(live_organisation(
        "Solicitors Regulation Authority",
        "contactcentre@sra.org.uk",
        "https://www.sra.org.uk",
        "0370 606 2555",
    ))?;
    let arb = organisations.insert(live_organisation(
        "Architects Registration Board",
        "info@arb.org.uk",
        "https://arb.org.uk",
        "020 7580 5861",
    ))?;

    professions.insert(live_profession(SeedProfession {
        name: "Doctor",
        nations: &["GB-ENG", "GB-SCT", "GB-WLS", "GB-NIR"],
        industry: &health,
        regulation_type: RegulationType::Licensing,
        description: "Diagnoses and treats illness and injury.",
        reserved_activities: "Prescribing prescription-only medicines.",
        routes_to_obtain: "Approved medical degree followed by foundation training.",
        legislation: "Medical Act 1983",
        organisation: &gmc,
    }))?;
    professions.insert(live_profession(SeedProfession {
        name: "Solicitor",
        nations: &["GB-ENG", "GB-WLS"],
        industry: &law,
        regulation_type: RegulationType::Licensing,
        description: "Provides legal advice and representation.",
        reserved_activities: "Conduct of litigation and reserved instrument activities.",
        routes_to_obtain: "Qualifying law degree plus the Solicitors Qualifying Examination.",
        legislation: "Solicitors Act 1974",
        organisation: &sra,
    }))?;
    professions.insert(live_profession(SeedProfession {
        name: "Architect",
        nations: &["GB-ENG", "GB-SCT", "GB-WLS", "GB-NIR"],
        industry: &architecture,
        regulation_type: RegulationType::Certification,
        description: "Designs buildings and oversees their construction.",
        reserved_activities: "Use of the protected title architect.",
        routes_to_obtain: "ARB-prescribed qualifications at Parts 1, 2 and 3.",
        legislation: "Architects Act 1997",
        organisation: &arb,
    }))?;

    // One draft-only profession, visible in the admin listing but not in
    // public search.
    let mut in_progress = Profession::new("Play therapist");
    let mut draft = in_progress.new_draft(None, Utc::now());
    draft.status = VersionStatus::Draft;
    draft.occupation_locations = vec!["GB-ENG".to_string()];
    draft.industries = vec![health.clone()];
    in_progress.versions.push(draft);
    professions.insert(in_progress)?;

    Ok(())
}

/// Seeds a first administrator account through the registration flow so the
/// user store is never empty in development.
pub(crate) fn seed_users<U>(users: &U) -> Result<(), RepositoryError>
where
    U: UserRepository,
{
    let mut flow = RegistrationFlow::new(Role::Administrator);
    let registered = flow
        .enter_personal_details("Register Admin", "admin@register.local")
        .and_then(|_| flow.confirm())
        .and_then(|_| flow.complete());

    match registered {
        Ok(user) => {
            users.insert(user)?;
            Ok(())
        }
        // The flow above always walks start -> details -> confirmed.
        Err(err) => Err(RepositoryError::Unavailable(err.to_string())),
    }
}
