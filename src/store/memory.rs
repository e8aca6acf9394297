//! Process-lifetime map stores. Each operation takes the lock on its own, so
//! a read-modify-write sequence in the service is not atomic across calls:
//! concurrent mutation of the same id races without a defined winner.

use crate::error::AppError;
use crate::model::{Beer, Customer};
use crate::store::{BeerFilter, BeerStore, CustomerFilter, CustomerStore};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryBeerStore {
    records: RwLock<HashMap<Uuid, Beer>>,
}

impl MemoryBeerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BeerStore for MemoryBeerStore {
    async fn get(&self, id: Uuid) -> Result<Option<Beer>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("beer store lock poisoned".into()))?;
        Ok(records.get(&id).cloned())
    }

    async fn put(&self, beer: Beer) -> Result<(), AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("beer store lock poisoned".into()))?;
        records.insert(beer.id, beer);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool, AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("beer store lock poisoned".into()))?;
        Ok(records.remove(&id).is_some())
    }

    /// Filters and pagination are accepted but not applied here.
    async fn list(&self, _filter: &BeerFilter) -> Result<Vec<Beer>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("beer store lock poisoned".into()))?;
        Ok(records.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("beer store lock poisoned".into()))?;
        Ok(records.len() as u64)
    }
}

#[derive(Default)]
pub struct MemoryCustomerStore {
    records: RwLock<HashMap<Uuid, Customer>>,
}

impl MemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for MemoryCustomerStore {
    async fn get(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("customer store lock poisoned".into()))?;
        Ok(records.get(&id).cloned())
    }

    async fn put(&self, customer: Customer) -> Result<(), AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("customer store lock poisoned".into()))?;
        records.insert(customer.id, customer);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool, AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal("customer store lock poisoned".into()))?;
        Ok(records.remove(&id).is_some())
    }

    /// Filters and pagination are accepted but not applied here.
    async fn list(&self, _filter: &CustomerFilter) -> Result<Vec<Customer>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("customer store lock poisoned".into()))?;
        Ok(records.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal("customer store lock poisoned".into()))?;
        Ok(records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BeerStyle;
    use chrono::Utc;

    fn sample_beer(name: &str) -> Beer {
        Beer {
            id: Uuid::new_v4(),
            version: 1,
            beer_name: name.into(),
            beer_style: Some(BeerStyle::Ipa),
            upc: None,
            price: Some(9.99),
            quantity_on_hand: Some(10),
            created_date: Utc::now(),
            update_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn put_get_remove_round_trip() {
        let store = MemoryBeerStore::new();
        let beer = sample_beer("Test Ale");
        let id = beer.id;

        store.put(beer).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.get(id).await.unwrap().unwrap().beer_name, "Test Ale");

        assert!(store.remove(id).await.unwrap());
        assert!(!store.remove(id).await.unwrap());
        assert!(store.get(id).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn put_replaces_record_under_same_id() {
        let store = MemoryBeerStore::new();
        let mut beer = sample_beer("First");
        let id = beer.id;
        store.put(beer.clone()).await.unwrap();

        beer.beer_name = "Second".into();
        beer.version = 2;
        store.put(beer).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let stored = store.get(id).await.unwrap().unwrap();
        assert_eq!(stored.beer_name, "Second");
        assert_eq!(stored.version, 2);
    }

    #[tokio::test]
    async fn list_ignores_filter() {
        let store = MemoryBeerStore::new();
        store.put(sample_beer("A")).await.unwrap();
        store.put(sample_beer("B")).await.unwrap();

        let filter = BeerFilter {
            beer_name: Some("A".into()),
            limit: Some(1),
            ..Default::default()
        };
        assert_eq!(store.list(&filter).await.unwrap().len(), 2);
    }
}
