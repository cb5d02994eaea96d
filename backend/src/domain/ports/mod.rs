//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning opaque results.

mod curriculum_repository;
mod macros;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use curriculum_repository::{CurriculumPersistenceError, CurriculumRepository};
pub use user_repository::{UserPersistenceError, UserRepository};
