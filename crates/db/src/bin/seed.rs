//! Seed the development database with demo data.
//!
//! Usage: `DATABASE_URL=postgres://... cargo run -p fitquest-db --bin seed`

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitquest_db=info".into()),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = fitquest_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    fitquest_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    fitquest_db::seed::run(&pool).await.expect("Seeding failed");

    tracing::info!("Database seeded");
}
