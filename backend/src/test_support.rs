//! In-memory port implementations shared by unit and integration tests.
//!
//! These doubles keep handler tests free of live database dependencies while
//! exercising the same port traits the Diesel adapters implement.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::ports::{
    CurriculumPersistenceError, CurriculumRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Email, Login, ProgramVersionDetail, ProgramVersionId, ProgramVersionSummary, User, UserId,
};

/// Failure to inject into the next repository call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubFailure {
    Connection,
    Query,
}

impl StubFailure {
    fn to_user_error(self) -> UserPersistenceError {
        match self {
            Self::Connection => UserPersistenceError::connection("database unavailable"),
            Self::Query => UserPersistenceError::query("database query failed"),
        }
    }

    fn to_curriculum_error(self) -> CurriculumPersistenceError {
        match self {
            Self::Connection => CurriculumPersistenceError::connection("database unavailable"),
            Self::Query => CurriculumPersistenceError::query("database query failed"),
        }
    }
}

#[derive(Default)]
struct UsersState {
    rows: HashMap<Uuid, User>,
    failure: Option<StubFailure>,
}

/// In-memory `UserRepository` backed by a mutex-guarded map.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    state: Arc<Mutex<UsersState>>,
}

impl InMemoryUsers {
    /// Seed the store with the given users.
    pub fn with_users(users: Vec<User>) -> Self {
        let rows = users
            .into_iter()
            .map(|user| (*user.id.as_uuid(), user))
            .collect();
        Self {
            state: Arc::new(Mutex::new(UsersState {
                rows,
                failure: None,
            })),
        }
    }

    /// Make the next repository call fail with the given error.
    pub fn fail_next(&self, failure: StubFailure) {
        self.state.lock().expect("users state lock").failure = Some(failure);
    }

    /// Read one stored user directly, bypassing the port.
    pub fn get(&self, id: &Uuid) -> Option<User> {
        self.state
            .lock()
            .expect("users state lock")
            .rows
            .get(id)
            .cloned()
    }

    fn take_failure(&self) -> Option<StubFailure> {
        self.state.lock().expect("users state lock").failure.take()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        if let Some(failure) = self.take_failure() {
            return Err(failure.to_user_error());
        }
        Ok(self.get(id.as_uuid()))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        if let Some(failure) = self.take_failure() {
            return Err(failure.to_user_error());
        }
        Ok(self
            .state
            .lock()
            .expect("users state lock")
            .rows
            .values()
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        if let Some(failure) = self.take_failure() {
            return Err(failure.to_user_error());
        }
        let mut state = self.state.lock().expect("users state lock");
        match state.rows.get_mut(user.id.as_uuid()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        if let Some(failure) = self.take_failure() {
            return Err(failure.to_user_error());
        }
        let mut state = self.state.lock().expect("users state lock");
        Ok(state.rows.remove(id.as_uuid()).is_some())
    }
}

#[derive(Default)]
struct CurriculumState {
    versions: Vec<ProgramVersionSummary>,
    details: HashMap<Uuid, ProgramVersionDetail>,
    failure: Option<StubFailure>,
}

/// In-memory `CurriculumRepository` with fixed read models.
#[derive(Clone, Default)]
pub struct InMemoryCurriculum {
    state: Arc<Mutex<CurriculumState>>,
}

impl InMemoryCurriculum {
    /// Seed the overview listing.
    pub fn with_versions(versions: Vec<ProgramVersionSummary>) -> Self {
        Self {
            state: Arc::new(Mutex::new(CurriculumState {
                versions,
                ..CurriculumState::default()
            })),
        }
    }

    /// Seed one version detail addressable by id.
    pub fn with_detail(id: Uuid, detail: ProgramVersionDetail) -> Self {
        let mut details = HashMap::new();
        details.insert(id, detail);
        Self {
            state: Arc::new(Mutex::new(CurriculumState {
                details,
                ..CurriculumState::default()
            })),
        }
    }

    /// Make the next repository call fail with the given error.
    pub fn fail_next(&self, failure: StubFailure) {
        self.state.lock().expect("curriculum state lock").failure = Some(failure);
    }

    fn take_failure(&self) -> Option<StubFailure> {
        self.state
            .lock()
            .expect("curriculum state lock")
            .failure
            .take()
    }
}

#[async_trait]
impl CurriculumRepository for InMemoryCurriculum {
    async fn list_versions(
        &self,
    ) -> Result<Vec<ProgramVersionSummary>, CurriculumPersistenceError> {
        if let Some(failure) = self.take_failure() {
            return Err(failure.to_curriculum_error());
        }
        Ok(self
            .state
            .lock()
            .expect("curriculum state lock")
            .versions
            .clone())
    }

    async fn find_version_detail(
        &self,
        id: &ProgramVersionId,
    ) -> Result<Option<ProgramVersionDetail>, CurriculumPersistenceError> {
        if let Some(failure) = self.take_failure() {
            return Err(failure.to_curriculum_error());
        }
        Ok(self
            .state
            .lock()
            .expect("curriculum state lock")
            .details
            .get(id.as_uuid())
            .cloned())
    }
}

/// Build a valid user with fresh random identity for test fixtures.
pub fn sample_user(login: &str, email: &str) -> User {
    User {
        id: UserId::random(),
        first_name: "Alice".into(),
        second_name: None,
        middle_name: "May".into(),
        login: Login::new(login).expect("valid login"),
        email: Email::new(email).expect("valid email"),
        created_date: NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid date"),
        role_id: 1,
    }
}
