//! Domain primitives and aggregates.
//!
//! Transport-agnostic entities, validated identifiers, the error model, and
//! the ports driven adapters implement. Serde contracts are documented on
//! each type.

pub mod curriculum;
pub mod error;
pub mod ports;
pub mod user;

pub use self::curriculum::{
    DisciplineEntry, ProgramVersionDetail, ProgramVersionId, ProgramVersionSummary,
};
pub use self::error::{Error, ErrorCode};
pub use self::user::{Email, Login, User, UserId, UserValidationError};
