//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel rows and domain types and
//! maps database failures into port error variants. No business logic lives
//! here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, Login, User, UserId};

use super::models::{UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        other => UserPersistenceError::query(other.to_string()),
    }
}

/// Convert a database row to a domain user. Stored rows violating the
/// non-empty login/email invariant surface as query errors rather than
/// panics.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let login = Login::new(row.login)
        .map_err(|err| UserPersistenceError::query(format!("stored login invalid: {err}")))?;
    let email = Email::new(row.email)
        .map_err(|err| UserPersistenceError::query(format!("stored email invalid: {err}")))?;

    Ok(User {
        id: UserId::from_uuid(row.user_id),
        first_name: row.first_name,
        second_name: row.second_name,
        middle_name: row.middle_name,
        login,
        email,
        created_date: row.created_date,
        role_id: row.role_id,
    })
}

fn user_to_changeset(user: &User) -> UserChangeset<'_> {
    UserChangeset {
        first_name: &user.first_name,
        second_name: user.second_name.as_deref(),
        middle_name: &user.middle_name,
        login: user.login.as_str(),
        email: user.email.as_str(),
        created_date: user.created_date,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::user_id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = users::table
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(users::table.filter(users::user_id.eq(user.id.as_uuid())))
            .set(user_to_changeset(user))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(users::table.filter(users::user_id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(affected > 0)
    }
}
