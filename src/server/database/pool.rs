use crate::server::database::connection::Connection;
use anyhow::{Context, Error};
use log::{error, info};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time;
use tokio_postgres::{Client, NoTls};

struct CommonPool<C> {
    /// connections in the pool, accessed in a FIFO manner
    connections: Mutex<VecDeque<C>>,
}

/// process-wide connection pool, cheap to clone
pub(crate) struct Pool<C>(Arc<CommonPool<C>>);

impl<C> Clone for Pool<C> {
    fn clone(&self) -> Pool<C> {
        Pool(self.0.clone())
    }
}

impl<C> Pool<C>
where
    C: Send + 'static,
{
    const DEFAULT_SIZE: usize = 10;
    const ACQUIRE_POLL_MILLIS: u64 = 50;

    /// create an empty connection pool
    pub fn new() -> Self {
        Self(Arc::new(CommonPool {
            connections: Mutex::new(VecDeque::with_capacity(Self::DEFAULT_SIZE)),
        }))
    }

    /// acquire a connection with specified timeout in seconds, bail out if timeout exceeds.
    pub async fn acquire(&self, timeout: u64) -> Option<Connection<C>> {
        let deadline = time::Instant::now() + Duration::from_secs(timeout);
        loop {
            if let Some(client) = self
                .0
                .connections
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .pop_front()
            {
                return Some(Connection::new(client, self.clone()));
            }
            if time::Instant::now() >= deadline {
                error!("timed out acquiring a connection from pool after {timeout} seconds");
                return None;
            }
            time::sleep(Duration::from_millis(Self::ACQUIRE_POLL_MILLIS)).await;
        }
    }

    pub fn release(&self, client: C) {
        self.0
            .connections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(client);
    }
}

impl Pool<Client> {
    /// fill the pool, connecting concurrently; fails if any connection cannot be established
    pub async fn init(&self, conn_str: &str) -> Result<(), Error> {
        let mut set = JoinSet::new();
        for _ in 0..Self::DEFAULT_SIZE {
            let conn_str = conn_str.to_owned();
            set.spawn(async move { connect(conn_str.as_str()).await });
        }
        let mut connections = VecDeque::with_capacity(Self::DEFAULT_SIZE);
        while let Some(res) = set.join_next().await {
            let client = res.context("connect task failed to join")??;
            info!("connection created");
            connections.push_back(client);
        }
        self.0
            .connections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .append(&mut connections);
        Ok(())
    }
}

async fn connect(conn_str: &str) -> Result<Client, Error> {
    let (client, conn) = tokio_postgres::connect(conn_str, NoTls)
        .await
        .context("failed to create connection")?;
    tokio::spawn(async move {
        if let Err(e) = conn.await {
            error!("connection returned error and aborted, {}", e);
        }
    });
    Ok(client)
}
