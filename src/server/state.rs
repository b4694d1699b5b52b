use crate::server::store::OrderStore;

/// per-worker handle to the shared store, injected via `web::Data`
#[derive(Clone)]
pub(crate) struct AppState {
    store: OrderStore,
}

impl AppState {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn app_state_exposes_its_store() {
        let state = AppState::new(OrderStore::new());
        assert!(state.store().list().await.unwrap().is_empty());
    }
}
