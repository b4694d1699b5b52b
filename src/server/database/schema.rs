use crate::server::database::pool::Pool;
use crate::server::DB_TIMEOUT_SECONDS;
use anyhow::{Context, Error};
use tokio_postgres::Client;

const CREATE_ORDERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS orders (
        id          BIGSERIAL PRIMARY KEY,
        symbol      TEXT NOT NULL,
        side        TEXT NOT NULL,
        quantity    DOUBLE PRECISION NOT NULL,
        price       DOUBLE PRECISION NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL
    );
"#;

/// create all declared tables if missing; called once at startup
pub(crate) async fn create_all(pool: &Pool<Client>) -> Result<(), Error> {
    let conn = pool
        .acquire(DB_TIMEOUT_SECONDS)
        .await
        .context("no connection available for schema creation")?;
    conn.execute(CREATE_ORDERS_TABLE, &[])
        .await
        .context("failed to create orders table")?;
    Ok(())
}
