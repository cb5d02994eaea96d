//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Driven port for user rows. Users are created by an external flow, so the
/// port exposes no insert.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every user. May legitimately be empty; policy on empty results
    /// belongs to the caller.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Overwrite the mutable fields of an existing user in one statement.
    /// Returns `false` when no row matched the identifier. Role assignment
    /// is owned by a separate flow and is never written here.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Delete a user by identifier. Returns `false` when no row matched.
    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
