pub(crate) mod connection;
pub(crate) mod pool;
pub(crate) mod schema;
