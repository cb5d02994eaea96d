//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types; schema definitions and row structs stay internal to this module.
//! Connections come from a `bb8` pool with native async support through
//! `diesel-async`, and every database failure is mapped to a port error.

mod diesel_curriculum_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_curriculum_repository::DieselCurriculumRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
