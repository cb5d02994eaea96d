//! Backend entry-point: wires configuration, the connection pool, REST
//! endpoints, and OpenAPI docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::{configure_routes, state::HttpState};
use backend::outbound::persistence::{
    DbPool, DieselCurriculumRepository, DieselUserRepository, PoolConfig,
};

/// Command-line options. Every flag falls back to an environment variable so
/// container deployments need no arguments.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "Roadmap Designer admin backend")]
struct Cli {
    /// PostgreSQL connection string; falls back to `DATABASE_URL`.
    #[arg(long)]
    database_url: Option<String>,

    /// Socket address to bind; falls back to `BIND_ADDR`, then 0.0.0.0:8080.
    #[arg(long)]
    bind: Option<String>,
}

impl Cli {
    fn database_url(&self) -> std::io::Result<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .ok_or_else(|| {
                std::io::Error::other("no database URL: pass --database-url or set DATABASE_URL")
            })
    }

    fn bind_addr(&self) -> String {
        self.bind
            .clone()
            .or_else(|| std::env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| "0.0.0.0:8080".to_owned())
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let database_url = cli.database_url()?;
    let bind_addr = cli.bind_addr();

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let state = web::Data::new(HttpState::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselCurriculumRepository::new(pool)),
    ));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness flag stays reachable.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new().configure(|cfg| {
            configure_routes(cfg, state.clone(), server_health_state.clone());
        });

        #[cfg(debug_assertions)]
        let app =
            app.service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            );

        app
    })
    .bind(bind_addr.as_str())?;

    info!(addr = %bind_addr, "server listening");
    health_state.mark_ready();
    server.run().await
}
