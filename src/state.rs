//! Shared application state for all routes.

use crate::service::{BeerService, CustomerService};
use crate::store::memory::{MemoryBeerStore, MemoryCustomerStore};
use crate::store::postgres::{PostgresBeerStore, PostgresCustomerStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub beers: BeerService,
    pub customers: CustomerService,
}

impl AppState {
    /// Services over process-lifetime map stores.
    pub fn in_memory() -> Self {
        Self {
            beers: BeerService::new(Arc::new(MemoryBeerStore::new())),
            customers: CustomerService::new(Arc::new(MemoryCustomerStore::new())),
        }
    }

    /// Services over PostgreSQL stores sharing one pool. The caller is
    /// expected to have run [`crate::store::postgres::ensure_tables`].
    pub fn with_pool(pool: PgPool) -> Self {
        Self {
            beers: BeerService::new(Arc::new(PostgresBeerStore::new(pool.clone()))),
            customers: CustomerService::new(Arc::new(PostgresCustomerStore::new(pool))),
        }
    }
}
