//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: Uuid,
    pub first_name: String,
    pub second_name: Option<String>,
    pub middle_name: String,
    pub login: String,
    pub email: String,
    pub created_date: NaiveDate,
    pub role_id: i32,
}

/// Changeset overwriting a user's mutable fields. Role assignment is owned
/// by a separate flow, so `role_id` is deliberately absent.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
// An absent second name must overwrite the column with NULL, not skip it.
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserChangeset<'a> {
    pub first_name: &'a str,
    pub second_name: Option<&'a str>,
    pub middle_name: &'a str,
    pub login: &'a str,
    pub email: &'a str,
    pub created_date: NaiveDate,
}

/// Joined row for the program version overview listing.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct ProgramVersionSummaryRow {
    pub academic_year: i32,
    pub program_code: String,
    pub program_name: String,
}

/// Joined row carrying the parent program fields for one version.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct ProgramInfoRow {
    pub program_code: String,
    pub program_name: String,
    pub description: Option<String>,
}

/// Joined row for one program-discipline association with its discipline.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct DisciplineEntryRow {
    pub program_discipline_id: Uuid,
    pub discipline_name: String,
    pub semester: i32,
    pub description: Option<String>,
}
