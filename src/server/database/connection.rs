use crate::server::database::pool::Pool;
use std::ops::Deref;

/// a pooled connection, handed back to its pool on drop
pub(crate) struct Connection<C>
where
    C: Send + 'static,
{
    client: Option<C>,
    pool: Pool<C>,
}

impl<C> Connection<C>
where
    C: Send + 'static,
{
    pub fn new(client: C, pool: Pool<C>) -> Self {
        Self {
            client: Some(client),
            pool,
        }
    }
}

impl<C> Deref for Connection<C>
where
    C: Send + 'static,
{
    type Target = C;

    fn deref(&self) -> &C {
        // client is only None after drop
        self.client.as_ref().expect("connection already released")
    }
}

impl<C> Drop for Connection<C>
where
    C: Send + 'static,
{
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            self.pool.release(client);
        }
    }
}
