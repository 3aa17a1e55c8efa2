use crate::register::organisations::OrganisationId;
use crate::register::repository::{RepositoryError, UserRepository};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Administrator,
    Registrar,
    Editor,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Registrar => "Registrar",
            Self::Editor => "Editor",
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::Administrator, Self::Registrar, Self::Editor]
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("an external identifier has already been assigned to this user")]
    IdentifierAlreadyAssigned,
    #[error("cannot {action} a registration in the {state} state")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

/// An internal account. The external identifier arrives on first sign-in
/// through the identity provider and is write-once after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
    pub organisation: Option<OrganisationId>,
    pub external_identifier: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            roles: vec![role],
            organisation: None,
            external_identifier: None,
        }
    }

    pub fn for_organisation(mut self, organisation: OrganisationId) -> Self {
        self.organisation = Some(organisation);
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn assign_external_identifier(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<(), AccountError> {
        if self.external_identifier.is_some() {
            return Err(AccountError::IdentifierAlreadyAssigned);
        }
        self.external_identifier = Some(identifier.into());
        Ok(())
    }
}

/// Where a new-user registration has got to. Details may be re-entered any
/// number of times before confirmation; after that the flow only moves
/// forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationState {
    Start,
    PersonalDetailsEntered { name: String, email: String },
    Confirmed { name: String, email: String },
    Complete,
}

impl RegistrationState {
    const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::PersonalDetailsEntered { .. } => "personal-details-entered",
            Self::Confirmed { .. } => "confirmed",
            Self::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationFlow {
    state: RegistrationState,
    role: Role,
}

impl RegistrationFlow {
    pub fn new(role: Role) -> Self {
        Self {
            state: RegistrationState::Start,
            role,
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn enter_personal_details(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), AccountError> {
        match self.state {
            RegistrationState::Start | RegistrationState::PersonalDetailsEntered { .. } => {
                self.state = RegistrationState::PersonalDetailsEntered {
                    name: name.into(),
                    email: email.into(),
                };
                Ok(())
            }
            _ => Err(AccountError::InvalidTransition {
                action: "enter personal details for",
                state: self.state.name(),
            }),
        }
    }

    pub fn confirm(&mut self) -> Result<(), AccountError> {
        match std::mem::replace(&mut self.state, RegistrationState::Start) {
            RegistrationState::PersonalDetailsEntered { name, email } => {
                self.state = RegistrationState::Confirmed { name, email };
                Ok(())
            }
            other => {
                let state = other.name();
                self.state = other;
                Err(AccountError::InvalidTransition {
                    action: "confirm",
                    state,
                })
            }
        }
    }

    /// Finishes the flow and yields the account to persist.
    pub fn complete(&mut self) -> Result<User, AccountError> {
        match std::mem::replace(&mut self.state, RegistrationState::Complete) {
            RegistrationState::Confirmed { name, email } => Ok(User::new(name, email, self.role)),
            other => {
                let state = other.name();
                self.state = other;
                Err(AccountError::InvalidTransition {
                    action: "complete",
                    state,
                })
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AccountAccessError {
    /// A signed-in identity with no local account is refused, never
    /// auto-provisioned.
    #[error("no local account matches the signed-in identity")]
    Forbidden,
    #[error("an account with this email address already exists")]
    EmailAlreadyExists,
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct AccountService<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> AccountService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    pub fn create(&self, user: User) -> Result<User, AccountAccessError> {
        self.users.insert(user).map_err(|err| match err {
            RepositoryError::Conflict => AccountAccessError::EmailAlreadyExists,
            other => AccountAccessError::Repository(other),
        })
    }

    /// Resolves an identity-provider callback subject to a local account.
    pub fn login(&self, external_identifier: &str) -> Result<User, AccountAccessError> {
        self.users
            .fetch_by_external_identifier(external_identifier)?
            .ok_or(AccountAccessError::Forbidden)
    }

    /// Binds the identity-provider subject to an existing account on first
    /// sign-in. The identifier is write-once.
    pub fn link_identity(
        &self,
        email: &str,
        external_identifier: &str,
    ) -> Result<User, AccountAccessError> {
        let mut user = self
            .users
            .fetch_by_email(email)?
            .ok_or(AccountAccessError::Forbidden)?;
        user.assign_external_identifier(external_identifier)?;
        self.users.update(user.clone())?;
        Ok(user)
    }
}
