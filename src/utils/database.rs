use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

// Connects and bootstraps the cakes table in one step; the pool stays
// small since every invocation runs exactly one query.
pub async fn connect(database_url: &str) -> DatabaseConnection {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url)
        .await
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            panic!("Error connecting to the cake database {}", database_url)
        });

    if let Err(err) = sqlx::migrate!().run(&pool).await {
        tracing::error!("{}", err);
        panic!("Failed to bootstrap the cakes table");
    }

    DatabaseConnection { pool }
}
