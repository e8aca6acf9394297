//! Customer CRUD over an injected store.

use crate::error::AppError;
use crate::model::{Customer, CustomerPatch, CustomerUpsert};
use crate::store::{CustomerFilter, CustomerStore};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: CustomerUpsert) -> Result<Customer, AppError> {
        let now = Utc::now();
        let customer = Customer {
            id: Uuid::new_v4(),
            version: 1,
            customer_name: input.customer_name.unwrap_or_default(),
            created_date: now,
            last_modified_date: now,
        };
        self.store.put(customer.clone()).await?;
        tracing::debug!(id = %customer.id, "created customer");
        Ok(customer)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, AppError> {
        self.store.get(id).await
    }

    pub async fn list(&self, filter: &CustomerFilter) -> Result<Vec<Customer>, AppError> {
        self.store.list(filter).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: CustomerUpsert,
    ) -> Result<Option<Customer>, AppError> {
        let Some(mut existing) = self.store.get(id).await? else {
            return Ok(None);
        };
        existing.customer_name = input.customer_name.unwrap_or_default();
        existing.version += 1;
        existing.last_modified_date = Utc::now();
        self.store.put(existing.clone()).await?;
        Ok(Some(existing))
    }

    /// Partial merge; version and timestamp move on every call.
    pub async fn patch(&self, id: Uuid, patch: CustomerPatch) -> Result<Option<Customer>, AppError> {
        let Some(mut existing) = self.store.get(id).await? else {
            return Ok(None);
        };
        if let Some(name) = patch.customer_name.as_deref() {
            if !name.trim().is_empty() {
                existing.customer_name = name.to_string();
            }
        }
        existing.version += 1;
        existing.last_modified_date = Utc::now();
        self.store.put(existing.clone()).await?;
        Ok(Some(existing))
    }

    /// Removes the record. Returns whether a record existed prior to removal.
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        self.store.remove(id).await
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryCustomerStore;

    fn service() -> CustomerService {
        CustomerService::new(Arc::new(MemoryCustomerStore::new()))
    }

    fn named(name: &str) -> CustomerUpsert {
        CustomerUpsert {
            customer_name: Some(name.into()),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let svc = service();
        let created = svc.create(named("mahmoud")).await.unwrap();
        assert_eq!(created.version, 1);

        let fetched = svc.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.customer_name, "mahmoud");
    }

    #[tokio::test]
    async fn update_bumps_version_by_exactly_one_per_call() {
        let svc = service();
        let created = svc.create(named("before")).await.unwrap();

        let first = svc
            .update(created.id, named("after"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.version, 2);
        assert_eq!(first.customer_name, "after");

        // Same input again: fields unchanged, version still moves.
        let second = svc
            .update(created.id, named("after"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(second.version, 3);
    }

    #[tokio::test]
    async fn patch_blank_name_keeps_existing_name() {
        let svc = service();
        let created = svc.create(named("keep")).await.unwrap();

        let patched = svc
            .patch(
                created.id,
                CustomerPatch {
                    customer_name: Some("".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.customer_name, "keep");
        assert_eq!(patched.version, 2);
    }

    #[tokio::test]
    async fn delete_missing_id_is_false() {
        let svc = service();
        assert!(!svc.delete(Uuid::new_v4()).await.unwrap());
    }
}
