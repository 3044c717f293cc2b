//! Administrator provisioning binary
//!
//! Creates (or refreshes) the default administrator account. Accounts are
//! never created through the API; this is the only provisioning path.
//!
//! ```bash
//! SEED_ADMIN_EMAIL=admin@havenbridge.com SEED_ADMIN_PASSWORD=... cargo run -p haven-api --bin haven-seed
//! ```

use haven_common::{hash_password, try_init_tracing, AppConfig};
use haven_core::AdminRepository;
use haven_db::{create_pool, PgAdminRepository};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let email =
        std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| "admin@havenbridge.com".to_string());
    let full_name = std::env::var("SEED_ADMIN_NAME")
        .unwrap_or_else(|_| "System Administrator".to_string());
    let password =
        std::env::var("SEED_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    info!("Seeding database...");

    let db_config = haven_db::DatabaseConfig {
        url: config.database.url.clone(),
        ..Default::default()
    };
    let pool = create_pool(&db_config).await?;

    let password_hash = hash_password(&password)?;

    let repo = PgAdminRepository::new(pool);
    let admin = repo
        .upsert(&email, &full_name, "SUPER_ADMIN", &password_hash)
        .await?;

    info!(admin_id = admin.id, email = %admin.email, "Administrator provisioned");
    if std::env::var("SEED_ADMIN_PASSWORD").is_err() {
        warn!("Using the default password; change it after first login");
    }

    Ok(())
}
