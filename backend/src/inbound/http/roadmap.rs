//! Public endpoints consumed by the roadmap client.
//!
//! `GET /Roadmap` returns raw user entities rather than the admin DTO, a
//! second, less-filtered listing kept for wire compatibility with the
//! existing client. `GET /Roadmap/login` serves a static page and performs
//! no authentication.

use actix_web::{HttpResponse, get, web};
use tracing::info;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User};
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

const LOGIN_PAGE: &str = include_str!("../../../static/login.html");

fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    Error::internal(error.to_string())
}

/// List users in their raw entity shape, role id included.
#[utoipa::path(
    get,
    path = "/Roadmap",
    responses(
        (status = 200, description = "Users in entity shape", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["roadmap"],
    operation_id = "listUsersPublic"
)]
#[get("/Roadmap")]
pub async fn list_users_public(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    info!("retrieving users for the roadmap client");
    let users = state
        .users
        .list()
        .await
        .map_err(map_user_persistence_error)?;
    Ok(web::Json(users))
}

/// Serve the static login page. No credentials are checked anywhere.
#[utoipa::path(
    get,
    path = "/Roadmap/login",
    responses((status = 200, description = "Login page", body = String, content_type = "text/html")),
    tags = ["roadmap"],
    operation_id = "loginPage"
)]
#[get("/Roadmap/login")]
pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LOGIN_PAGE)
}
