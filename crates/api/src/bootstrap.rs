//! First-run bootstrap: default technician account and fixture data.
//!
//! Runs once at startup, after migrations. Every step is idempotent, so
//! restarting the server against an existing database is safe.

use anyhow::Context;
use fieldops_db::fixtures::{seed_catalog, seed_demo_tasks};
use fieldops_db::models::user::CreateUser;
use fieldops_db::repositories::UserRepo;
use fieldops_db::DbPool;

use crate::auth::password::hash_password;

const DEFAULT_TECHNICIAN_USERNAME: &str = "tecnico";

/// Seed the database for first use: a default technician account (when no
/// users exist), the activity catalog, and demo tasks assigned to the
/// technician.
///
/// The technician's password comes from `DEFAULT_TECHNICIAN_PASSWORD`
/// (default `tecnico123`, for local development only).
pub async fn bootstrap(pool: &DbPool) -> anyhow::Result<()> {
    if UserRepo::count(pool).await? == 0 {
        let password = std::env::var("DEFAULT_TECHNICIAN_PASSWORD")
            .unwrap_or_else(|_| "tecnico123".into());
        let password_hash = hash_password(&password)
            .map_err(|e| anyhow::anyhow!("Failed to hash bootstrap password: {e}"))?;

        let user = UserRepo::create(
            pool,
            &CreateUser {
                username: DEFAULT_TECHNICIAN_USERNAME.into(),
                email: "tecnico@fieldops.local".into(),
                full_name: "Técnico de Campo".into(),
                password_hash,
                role: "technician".into(),
            },
        )
        .await
        .context("Failed to create default technician")?;

        tracing::info!(user_id = user.id, username = %user.username, "Created default technician");
    }

    if seed_catalog(pool).await.context("Failed to seed activity catalog")? {
        tracing::info!("Activity catalog seeded");
    }

    if let Some(technician) = UserRepo::find_by_username(pool, DEFAULT_TECHNICIAN_USERNAME).await? {
        if seed_demo_tasks(pool, technician.id)
            .await
            .context("Failed to seed demo tasks")?
        {
            tracing::info!(technician_id = technician.id, "Demo tasks seeded");
        }
    }

    Ok(())
}
