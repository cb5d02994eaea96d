//! HTTP inbound adapter exposing REST endpoints.

pub mod admin;
pub mod dto;
pub mod error;
pub mod health;
pub mod roadmap;
pub mod state;

use actix_web::web;

use crate::domain::Error;

pub use error::{ApiResult, MessageBody};

/// Register every route plus shared extractor configuration on an app.
///
/// Malformed JSON payloads and unparseable path parameters are mapped to
/// the domain error type here so the 400 response carries the same
/// `{ "Message": … }` envelope as every other failure.
pub fn configure_routes(
    cfg: &mut web::ServiceConfig,
    state: web::Data<state::HttpState>,
    health_state: web::Data<health::HealthState>,
) {
    let json_config = web::JsonConfig::default()
        .error_handler(|_err, _req| Error::invalid_request("Invalid user data.").into());
    let path_config = web::PathConfig::default()
        .error_handler(|_err, _req| Error::invalid_request("Invalid request parameters.").into());

    cfg.app_data(state)
        .app_data(health_state)
        .app_data(json_config)
        .app_data(path_config)
        .service(admin::get_user)
        .service(admin::update_user)
        .service(admin::list_users)
        .service(admin::delete_user)
        .service(admin::list_program_versions)
        .service(admin::get_program_version_detail)
        .service(roadmap::list_users_public)
        .service(roadmap::login_page)
        .service(health::ready)
        .service(health::live);
}
