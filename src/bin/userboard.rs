// src/bin/userboard.rs
//
// userboard: serves the paginated user list as a JSON view model.
//
// Example:
//   userboard --bind 127.0.0.1:8080 --users-file data/users.json --page-size 10
//
// Routes:
// - GET /users?page=N[&go=first|prev|next|last]
// - GET /users/health

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use userboard::config::{set_basic_auth, set_page_size, BasicAuthConfig};
use userboard::routes::users_route::users_routes;
use userboard::services::user_source_service::JsonFileSource;
use userboard::user::UserSource;
use userboard::utils::constants::{DEFAULT_BIND, DEFAULT_PAGE_SIZE, DEFAULT_USERS_FILE};

#[derive(Parser, Debug)]
#[command(name = "userboard", version, about = "Paginated user list service")]
struct Args {
    /// Address to listen on
    #[arg(long, env = "USERBOARD_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// JSON file holding the array of user records
    #[arg(long, env = "USERBOARD_USERS_FILE", default_value = DEFAULT_USERS_FILE)]
    users_file: String,

    /// Rows per page, fixed for the lifetime of the process
    #[arg(long, env = "USERBOARD_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Optional basic auth credentials as user:password
    #[arg(long, env = "USERBOARD_BASIC_AUTH")]
    basic_auth: Option<String>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(".env not loaded: {e}");
    }

    // Tracing (respects RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    set_page_size(args.page_size)?;
    let auth = args
        .basic_auth
        .as_deref()
        .map(BasicAuthConfig::parse)
        .transpose()?;
    if auth.is_none() {
        warn!("No basic auth configured; /users is public");
    }
    set_basic_auth(auth);

    let source: Arc<dyn UserSource> = Arc::new(JsonFileSource::new(&args.users_file));

    info!(
        bind = %args.bind,
        users_file = %args.users_file,
        page_size = args.page_size,
        "Starting userboard"
    );

    // HttpServer handles Ctrl+C / SIGTERM and drains workers before returning.
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(source.clone()))
            .configure(users_routes)
    })
    .bind(&args.bind)?
    .shutdown_timeout(5)
    .run()
    .await?;

    info!("userboard exited");
    Ok(())
}
