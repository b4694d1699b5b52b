//! data-access layer for the orders table

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod postgres;

/// backing store used by the handlers; swapped for an in-memory
/// store in test builds so endpoint tests run without a database
#[cfg(not(test))]
pub(crate) type OrderStore = postgres::PgOrderStore;
#[cfg(test)]
pub(crate) type OrderStore = memory::MemOrderStore;
