//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without live I/O.

use std::sync::Arc;

use crate::domain::ports::{CurriculumRepository, UserRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
    pub curriculum: Arc<dyn CurriculumRepository>,
}

impl HttpState {
    /// Bundle the port implementations handlers need.
    pub fn new(users: Arc<dyn UserRepository>, curriculum: Arc<dyn CurriculumRepository>) -> Self {
        Self { users, curriculum }
    }
}
