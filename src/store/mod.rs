//! Keyed record stores: ephemeral in-memory maps or PostgreSQL tables.

pub mod memory;
pub mod postgres;

use crate::error::AppError;
use crate::model::{Beer, BeerStyle, Customer};
use async_trait::async_trait;
use uuid::Uuid;

/// List filter for beers. Implementations MAY ignore any of these: the
/// in-memory store returns everything, the PostgreSQL store applies them.
/// Callers must not assume filtering was applied.
#[derive(Clone, Debug, Default)]
pub struct BeerFilter {
    /// Case-insensitive name substring.
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// List filter for customers. Same caveats as [`BeerFilter`].
#[derive(Clone, Debug, Default)]
pub struct CustomerFilter {
    pub customer_name: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Keyed collection of beer records. `list` has no ordering guarantee and no
/// uniqueness enforcement beyond the id key.
#[async_trait]
pub trait BeerStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Beer>, AppError>;
    /// Insert or replace the record under its id.
    async fn put(&self, beer: Beer) -> Result<(), AppError>;
    /// Remove the record. Returns whether a record existed prior to removal.
    async fn remove(&self, id: Uuid) -> Result<bool, AppError>;
    async fn list(&self, filter: &BeerFilter) -> Result<Vec<Beer>, AppError>;
    async fn count(&self) -> Result<u64, AppError>;
}

/// Keyed collection of customer records.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Customer>, AppError>;
    async fn put(&self, customer: Customer) -> Result<(), AppError>;
    async fn remove(&self, id: Uuid) -> Result<bool, AppError>;
    async fn list(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, AppError>;
    async fn count(&self) -> Result<u64, AppError>;
}
