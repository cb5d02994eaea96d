//! Wire DTOs decoupling the HTTP shape from stored entities.
//!
//! All DTOs serialise with camelCase keys. The admin user projection omits
//! the role id; role assignment happens through a separate flow.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    DisciplineEntry, ProgramVersionDetail, ProgramVersionSummary, User,
};

/// Flat user projection returned by the admin read endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: Uuid,
    pub login: String,
    pub first_name: String,
    pub second_name: Option<String>,
    pub middle_name: String,
    pub email: String,
    pub created_date: NaiveDate,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            user_id: *user.id.as_uuid(),
            login: user.login.as_str().to_owned(),
            first_name: user.first_name.clone(),
            second_name: user.second_name.clone(),
            middle_name: user.middle_name.clone(),
            email: user.email.as_str().to_owned(),
            created_date: user.created_date,
        }
    }
}

/// Update payload for `POST /editUser`.
///
/// `roleId` is accepted for wire compatibility but never applied; the
/// stored role is preserved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: Uuid,
    pub login: String,
    pub first_name: String,
    #[serde(default)]
    pub second_name: Option<String>,
    pub middle_name: String,
    pub email: String,
    pub created_date: NaiveDate,
    #[serde(default)]
    pub role_id: Option<i32>,
}

/// Program version row for the admin overview listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramVersionDto {
    pub academic_year: i32,
    pub program_code: String,
    pub program_name: String,
}

impl From<ProgramVersionSummary> for ProgramVersionDto {
    fn from(summary: ProgramVersionSummary) -> Self {
        Self {
            academic_year: summary.academic_year,
            program_code: summary.program_code,
            program_name: summary.program_name,
        }
    }
}

/// One discipline entry inside a program version detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDisciplineDto {
    /// Identifier of the program-discipline association.
    pub program_discipline_id: Uuid,
    pub discipline_name: String,
    pub semester: i32,
    pub description: Option<String>,
}

impl From<DisciplineEntry> for ProgramDisciplineDto {
    fn from(entry: DisciplineEntry) -> Self {
        Self {
            program_discipline_id: entry.id,
            discipline_name: entry.name,
            semester: entry.semester,
            description: entry.description,
        }
    }
}

/// Full program version detail: parent program fields plus disciplines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgramVersionDetailDto {
    pub program_code: String,
    pub program_name: String,
    pub description: Option<String>,
    pub disciplines: Vec<ProgramDisciplineDto>,
}

impl From<ProgramVersionDetail> for ProgramVersionDetailDto {
    fn from(detail: ProgramVersionDetail) -> Self {
        Self {
            program_code: detail.program_code,
            program_name: detail.program_name,
            description: detail.description,
            disciplines: detail
                .disciplines
                .into_iter()
                .map(ProgramDisciplineDto::from)
                .collect(),
        }
    }
}
