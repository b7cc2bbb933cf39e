use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Connect to the TravelEase database.
///
/// Reads `DATABASE_URL` from the process environment, falling back to a
/// `.env` file when present.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let _ = dotenvy::dotenv();
    let url =
        dotenvy::var("DATABASE_URL").map_err(|e| DbErr::Custom(format!("DATABASE_URL: {e}")))?;

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(10)
        .min_connections(1)
        .sqlx_logging(true);

    Database::connect(opt).await
}
