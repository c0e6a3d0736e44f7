//! minibank - entry point
//!
//! Loads config, connects to PostgreSQL, bootstraps the schema and the
//! administrator account, then serves the HTTP gateway.

use std::str::FromStr;
use std::sync::Arc;

use minibank::account::Currency;
use minibank::auth::AuthService;
use minibank::config::AppConfig;
use minibank::db::Database;
use minibank::gateway::{run_server, state::AppState};
use minibank::user::UserService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }
    let _log_guard = minibank::logging::init_logging(&config);

    tracing::info!("Starting minibank ({}) in {} mode", env!("GIT_HASH"), env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    db.init_schema().await?;

    let default_currency = Currency::from_str(&config.default_currency)
        .map_err(|e| anyhow::anyhow!("invalid default_currency in config: {}", e))?;

    if let Some(admin) = &config.bootstrap_admin {
        UserService::ensure_admin(&db, &admin.username, &admin.password, default_currency)
            .await
            .map_err(|e| anyhow::anyhow!("bootstrap admin failed: {}", e))?;
    }

    let auth = Arc::new(AuthService::new(
        db.pool().clone(),
        config.jwt_secret(),
    ));
    let state = Arc::new(AppState::new(db, auth, default_currency));

    run_server(&config.gateway, state).await;
    Ok(())
}
