use crate::server::controller::error::ApiError;
use crate::server::model::order::{CreateOrderRequest, Order};
use crate::server::util::time;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// in-memory stand-in for the orders table, used by endpoint tests
#[derive(Clone, Default)]
pub(crate) struct MemOrderStore {
    orders: Arc<Mutex<Vec<Order>>>,
    next_id: Arc<AtomicI64>,
}

impl MemOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn connect(
        _: &crate::server::model::config::ServerConfig,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self::new())
    }

    pub async fn insert(&self, req: CreateOrderRequest) -> Result<Order, ApiError> {
        let order = Order {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            symbol: req.symbol,
            side: req.side,
            quantity: req.quantity,
            price: req.price,
            created_at: time::helper::get_utc_now(),
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.orders.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::order::Side;
    use std::collections::HashSet;
    use tokio::task::JoinSet;

    fn request(symbol: &str) -> CreateOrderRequest {
        CreateOrderRequest {
            symbol: symbol.to_string(),
            side: Side::Buy,
            quantity: 1.0,
            price: 100.0,
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_and_stamps_time() {
        time::mock_chrono::set_utc_now(1_700_000_000);
        let store = MemOrderStore::new();
        let first = store.insert(request("AAPL")).await.unwrap();
        let second = store.insert(request("MSFT")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.created_at.timestamp(), 1_700_000_000);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_get_distinct_ids() {
        let store = MemOrderStore::new();
        let mut set = JoinSet::new();
        for i in 0..32 {
            let store = store.clone();
            set.spawn(async move { store.insert(request(&format!("SYM{i}"))).await });
        }
        let mut ids = HashSet::new();
        while let Some(res) = set.join_next().await {
            let order = res.unwrap().unwrap();
            assert!(ids.insert(order.id), "duplicate id {}", order.id);
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(store.list().await.unwrap().len(), 32);
    }
}
