//! Port abstraction for curriculum read adapters and their errors.

use async_trait::async_trait;

use crate::domain::{ProgramVersionDetail, ProgramVersionId, ProgramVersionSummary};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by curriculum repository adapters.
    pub enum CurriculumPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "curriculum repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "curriculum repository query failed: {message}",
    }
}

/// Driven port for program version reads. This surface never mutates
/// curriculum data.
#[async_trait]
pub trait CurriculumRepository: Send + Sync {
    /// List every program version joined with its parent program.
    async fn list_versions(&self)
    -> Result<Vec<ProgramVersionSummary>, CurriculumPersistenceError>;

    /// Fetch one program version with its program fields and the full
    /// program-discipline chain.
    async fn find_version_detail(
        &self,
        id: &ProgramVersionId,
    ) -> Result<Option<ProgramVersionDetail>, CurriculumPersistenceError>;
}
