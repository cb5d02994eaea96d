//! PostgreSQL-backed `CurriculumRepository` implementation using Diesel ORM.
//!
//! Relationships are resolved with explicit inner joins. The detail fetch
//! issues two queries: one for the version and its parent program, one for
//! the discipline chain, ordered by semester then discipline name.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{CurriculumPersistenceError, CurriculumRepository};
use crate::domain::{
    DisciplineEntry, ProgramVersionDetail, ProgramVersionId, ProgramVersionSummary,
};

use super::models::{DisciplineEntryRow, ProgramInfoRow, ProgramVersionSummaryRow};
use super::pool::{DbPool, PoolError};
use super::schema::{disciplines, program_disciplines, program_versions, programs};

/// Diesel-backed implementation of the `CurriculumRepository` port.
#[derive(Clone)]
pub struct DieselCurriculumRepository {
    pool: DbPool,
}

impl DieselCurriculumRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CurriculumPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            CurriculumPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> CurriculumPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    debug!(error = %error, "diesel operation failed");

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            CurriculumPersistenceError::connection("database connection error")
        }
        other => CurriculumPersistenceError::query(other.to_string()),
    }
}

#[async_trait]
impl CurriculumRepository for DieselCurriculumRepository {
    async fn list_versions(
        &self,
    ) -> Result<Vec<ProgramVersionSummary>, CurriculumPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProgramVersionSummaryRow> = program_versions::table
            .inner_join(programs::table)
            .select((
                program_versions::academic_year,
                programs::program_code,
                programs::program_name,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| ProgramVersionSummary {
                academic_year: row.academic_year,
                program_code: row.program_code,
                program_name: row.program_name,
            })
            .collect())
    }

    async fn find_version_detail(
        &self,
        id: &ProgramVersionId,
    ) -> Result<Option<ProgramVersionDetail>, CurriculumPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let program: Option<ProgramInfoRow> = program_versions::table
            .inner_join(programs::table)
            .filter(program_versions::program_version_id.eq(id.as_uuid()))
            .select((
                programs::program_code,
                programs::program_name,
                programs::description,
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        let Some(program) = program else {
            return Ok(None);
        };

        let entries: Vec<DisciplineEntryRow> = program_disciplines::table
            .inner_join(disciplines::table)
            .filter(program_disciplines::program_version_id.eq(id.as_uuid()))
            .order((
                program_disciplines::semester.asc(),
                disciplines::discipline_name.asc(),
            ))
            .select((
                program_disciplines::program_discipline_id,
                disciplines::discipline_name,
                program_disciplines::semester,
                disciplines::description,
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(ProgramVersionDetail {
            program_code: program.program_code,
            program_name: program.program_name,
            description: program.description,
            disciplines: entries
                .into_iter()
                .map(|row| DisciplineEntry {
                    id: row.program_discipline_id,
                    name: row.discipline_name,
                    semester: row.semester,
                    description: row.description,
                })
                .collect(),
        }))
    }
}
