//! Curriculum read models: programs, program versions, and disciplines.
//!
//! These types are produced by the curriculum repository from explicit join
//! queries. They are read-only on this surface; authoring happens elsewhere.

use std::fmt;

use uuid::Uuid;

/// Stable program version identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramVersionId(Uuid);

impl ProgramVersionId {
    /// Wrap an already-parsed UUID.
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ProgramVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One program version joined with its parent program, as listed by the
/// admin overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramVersionSummary {
    pub academic_year: i32,
    /// Unique business key of the parent program.
    pub program_code: String,
    pub program_name: String,
}

/// One discipline attached to a program version, with its semester slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisciplineEntry {
    /// Identifier of the program-discipline association, not the discipline.
    pub id: Uuid,
    pub name: String,
    pub semester: i32,
    pub description: Option<String>,
}

/// Full detail for one program version: parent program fields plus the
/// discipline chain, ordered by semester then discipline name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramVersionDetail {
    pub program_code: String,
    pub program_name: String,
    pub description: Option<String>,
    pub disciplines: Vec<DisciplineEntry>,
}
