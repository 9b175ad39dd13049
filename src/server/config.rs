/**
 * Server Configuration
 *
 * Loads the optional PostgreSQL connection from the environment.
 *
 * Configuration errors are logged but do not prevent server startup: with
 * no database the realtime layer still works, and persistence-backed
 * routes answer 503 until one is configured.
 */

use sqlx::PgPool;

/// Database configuration result
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize the database connection pool
///
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs migrations
///
/// Returns `None` if `DATABASE_URL` is unset or the connection fails.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Persistence will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Persistence will be disabled.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            // Migrations may have already been applied by another process
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing; database might not be up to date");
        }
    }

    Some(pool)
}
