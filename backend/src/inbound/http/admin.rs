//! Admin endpoints: user management and curriculum reads.
//!
//! ```text
//! GET    /editUser/{userId}        one user, projected to a DTO
//! POST   /editUser                 overwrite a user's mutable fields
//! GET    /usersList                all users (404 when the store is empty)
//! DELETE /delete/{userId}          remove a user
//! GET    /GetProgramVersions       program versions joined with programs
//! GET    /program-version/{id}     full detail for one program version
//! ```
//!
//! Path casing is preserved from the original wire contract. None of these
//! endpoints enforce authentication; the deployment fronting this service is
//! expected to restrict access.

use actix_web::{delete, get, post, web};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::ports::{CurriculumPersistenceError, UserPersistenceError};
use crate::domain::{Email, Error, Login, ProgramVersionId, User, UserId, UserValidationError};
use crate::inbound::http::dto::{
    ProgramVersionDetailDto, ProgramVersionDto, UpdateUserRequest, UserDto,
};
use crate::inbound::http::error::{ApiResult, MessageBody};
use crate::inbound::http::state::HttpState;

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    Error::internal(error.to_string())
}

fn map_curriculum_persistence_error(error: CurriculumPersistenceError) -> Error {
    Error::internal(error.to_string())
}

fn map_validation_error(error: UserValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

/// Fetch one user by id, projected to the admin DTO (role id omitted).
#[utoipa::path(
    get,
    path = "/editUser/{user_id}",
    params(("user_id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "User not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["admin"],
    operation_id = "getUser"
)]
#[get("/editUser/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<UserDto>> {
    let id = UserId::from_uuid(path.into_inner());
    info!(user_id = %id, "retrieving user");

    let user = state
        .users
        .find_by_id(&id)
        .await
        .map_err(map_user_persistence_error)?
        .ok_or_else(|| {
            warn!(user_id = %id, "user not found");
            Error::not_found("User not found")
        })?;

    Ok(web::Json(UserDto::from(&user)))
}

/// Overwrite a user's mutable fields in one persistence operation.
///
/// A `roleId` in the payload is accepted but not applied; the stored role
/// survives the update. Role assignment belongs to a separate flow.
#[utoipa::path(
    post,
    path = "/editUser",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageBody),
        (status = 400, description = "Invalid user data", body = MessageBody),
        (status = 404, description = "User not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["admin"],
    operation_id = "updateUser"
)]
#[post("/editUser")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<MessageBody>> {
    let request = payload.into_inner();
    let id = UserId::from_uuid(request.user_id);
    info!(user_id = %id, "updating user");

    let existing = state
        .users
        .find_by_id(&id)
        .await
        .map_err(map_user_persistence_error)?
        .ok_or_else(|| {
            warn!(user_id = %id, "user not found for update");
            Error::not_found("User not found")
        })?;

    let updated = User {
        id: existing.id,
        first_name: request.first_name,
        second_name: request.second_name,
        middle_name: request.middle_name,
        login: Login::new(request.login).map_err(map_validation_error)?,
        email: Email::new(request.email).map_err(map_validation_error)?,
        created_date: request.created_date,
        // Stored role is preserved regardless of the payload.
        role_id: existing.role_id,
    };

    let applied = state
        .users
        .update(&updated)
        .await
        .map_err(map_user_persistence_error)?;
    if !applied {
        warn!(user_id = %id, "user disappeared before update was applied");
        return Err(Error::not_found("User not found"));
    }

    info!(user_id = %id, "user updated");
    Ok(web::Json(MessageBody::new("User updated successfully.")))
}

/// List all users, projected to DTOs. An empty store is a 404, not an empty
/// list; the program-version listing below intentionally differs.
#[utoipa::path(
    get,
    path = "/usersList",
    responses(
        (status = 200, description = "Users", body = [UserDto]),
        (status = 404, description = "No users exist", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["admin"],
    operation_id = "listUsers"
)]
#[get("/usersList")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserDto>>> {
    info!("retrieving all users");

    let users = state
        .users
        .list()
        .await
        .map_err(map_user_persistence_error)?;
    if users.is_empty() {
        warn!("no users found");
        return Err(Error::not_found("No users found"));
    }

    Ok(web::Json(users.iter().map(UserDto::from).collect()))
}

/// Delete a user by id.
#[utoipa::path(
    delete,
    path = "/delete/{user_id}",
    params(("user_id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageBody),
        (status = 404, description = "User not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["admin"],
    operation_id = "deleteUser"
)]
#[delete("/delete/{user_id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<MessageBody>> {
    let id = UserId::from_uuid(path.into_inner());
    info!(user_id = %id, "deleting user");

    let removed = state
        .users
        .delete(&id)
        .await
        .map_err(map_user_persistence_error)?;
    if !removed {
        warn!(user_id = %id, "user not found for deletion");
        return Err(Error::not_found("User not found"));
    }

    info!(user_id = %id, "user deleted");
    Ok(web::Json(MessageBody::new("User successfully deleted")))
}

/// List every program version joined with its parent program. Always 200,
/// possibly with an empty list.
#[utoipa::path(
    get,
    path = "/GetProgramVersions",
    responses(
        (status = 200, description = "Program versions", body = [ProgramVersionDto]),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["admin"],
    operation_id = "listProgramVersions"
)]
#[get("/GetProgramVersions")]
pub async fn list_program_versions(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProgramVersionDto>>> {
    info!("retrieving program versions");

    let versions = state
        .curriculum
        .list_versions()
        .await
        .map_err(map_curriculum_persistence_error)?;

    Ok(web::Json(
        versions.into_iter().map(ProgramVersionDto::from).collect(),
    ))
}

/// Fetch one program version with its program fields and discipline chain.
#[utoipa::path(
    get,
    path = "/program-version/{program_version_id}",
    params(("program_version_id" = Uuid, Path, description = "Program version identifier")),
    responses(
        (status = 200, description = "Program version detail", body = ProgramVersionDetailDto),
        (status = 404, description = "Program version not found", body = MessageBody),
        (status = 500, description = "Internal server error", body = MessageBody)
    ),
    tags = ["admin"],
    operation_id = "getProgramVersionDetail"
)]
#[get("/program-version/{program_version_id}")]
pub async fn get_program_version_detail(
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<ProgramVersionDetailDto>> {
    let id = ProgramVersionId::from_uuid(path.into_inner());
    info!(program_version_id = %id, "retrieving program version detail");

    let detail = state
        .curriculum
        .find_version_detail(&id)
        .await
        .map_err(map_curriculum_persistence_error)?
        .ok_or_else(|| {
            warn!(program_version_id = %id, "program version not found");
            Error::not_found("Program version not found")
        })?;

    Ok(web::Json(ProgramVersionDetailDto::from(detail)))
}
