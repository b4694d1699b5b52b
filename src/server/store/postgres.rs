use crate::server::controller::error::ApiError;
use crate::server::database::pool::Pool;
use crate::server::database::schema;
use crate::server::model::config::ServerConfig;
use crate::server::model::order::{CreateOrderRequest, Order};
use crate::server::util::time;
use crate::server::DB_TIMEOUT_SECONDS;
use chrono::{DateTime, Utc};
use log::error;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};

#[derive(Clone)]
pub(crate) struct PgOrderStore {
    pool: Pool<Client>,
}

impl PgOrderStore {
    /// warm up the pool and create missing tables; startup fails on an unreachable database
    pub async fn connect(config: &ServerConfig) -> Result<Self, anyhow::Error> {
        let pool = Pool::new();
        pool.init(config.database_url.as_str()).await?;
        schema::create_all(&pool).await?;
        Ok(Self { pool })
    }

    pub async fn insert(&self, req: CreateOrderRequest) -> Result<Order, ApiError> {
        if let Some(conn) = self.pool.acquire(DB_TIMEOUT_SECONDS).await {
            let created_at = time::helper::get_utc_now();
            let side = req.side.as_str();
            let params: &[&(dyn ToSql + Sync); 5] =
                &[&req.symbol, &side, &req.quantity, &req.price, &created_at];
            return match conn
                .query_one(
                    r#"
                    INSERT INTO orders(symbol, side, quantity, price, created_at)
                    VALUES ($1, $2, $3, $4, $5)
                    RETURNING id;
                "#,
                    params,
                )
                .await
            {
                Ok(row) => Ok(Order {
                    id: row.get("id"),
                    symbol: req.symbol,
                    side: req.side,
                    quantity: req.quantity,
                    price: req.price,
                    created_at,
                }),
                Err(e) => {
                    error!("insert order failed, {}", e);
                    Err(ApiError::DbError)
                }
            };
        }
        Err(ApiError::ServerIsBusy)
    }

    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        if let Some(conn) = self.pool.acquire(DB_TIMEOUT_SECONDS).await {
            return match conn
                .query(
                    "SELECT id, symbol, side, quantity, price, created_at FROM orders",
                    &[],
                )
                .await
            {
                Ok(rows) => Ok(rows.iter().map_while(order_from_row).collect()),
                Err(e) => {
                    error!("list orders failed, {}", e);
                    Err(ApiError::DbError)
                }
            };
        }
        Err(ApiError::ServerIsBusy)
    }
}

/// map a stored row back to the wire shape
fn order_from_row(row: &Row) -> Option<Order> {
    let side = row.try_get::<_, &str>("side").ok()?.parse().ok()?;
    let created_at: DateTime<Utc> = row.try_get("created_at").ok()?;
    Some(Order {
        id: row.try_get("id").ok()?,
        symbol: row.try_get("symbol").ok()?,
        side,
        quantity: row.try_get("quantity").ok()?,
        price: row.try_get("price").ok()?,
        created_at,
    })
}
