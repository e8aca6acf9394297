//! Beer CRUD over an injected store. Inputs are validated at the HTTP
//! boundary; absence is signaled with `None`, never an error.

use crate::error::AppError;
use crate::model::{Beer, BeerPatch, BeerUpsert};
use crate::store::{BeerFilter, BeerStore};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct BeerService {
    store: Arc<dyn BeerStore>,
}

impl BeerService {
    pub fn new(store: Arc<dyn BeerStore>) -> Self {
        Self { store }
    }

    /// Assigns a fresh id, version 1 and both timestamps; any client-supplied
    /// id in the request body is dropped during deserialization.
    pub async fn create(&self, input: BeerUpsert) -> Result<Beer, AppError> {
        let now = Utc::now();
        let beer = Beer {
            id: Uuid::new_v4(),
            version: 1,
            beer_name: input.beer_name.unwrap_or_default(),
            beer_style: input.beer_style,
            upc: input.upc,
            price: input.price,
            quantity_on_hand: input.quantity_on_hand,
            created_date: now,
            update_date: now,
        };
        self.store.put(beer.clone()).await?;
        tracing::debug!(id = %beer.id, "created beer");
        Ok(beer)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Beer>, AppError> {
        tracing::debug!(%id, "get beer by id");
        self.store.get(id).await
    }

    pub async fn list(&self, filter: &BeerFilter) -> Result<Vec<Beer>, AppError> {
        self.store.list(filter).await
    }

    /// Full replace: every mutable field is overwritten from the input, the
    /// version is incremented and the update timestamp refreshed.
    pub async fn update(&self, id: Uuid, input: BeerUpsert) -> Result<Option<Beer>, AppError> {
        let Some(mut existing) = self.store.get(id).await? else {
            return Ok(None);
        };
        existing.beer_name = input.beer_name.unwrap_or_default();
        existing.beer_style = input.beer_style;
        existing.upc = input.upc;
        existing.price = input.price;
        existing.quantity_on_hand = input.quantity_on_hand;
        existing.version += 1;
        existing.update_date = Utc::now();
        self.store.put(existing.clone()).await?;
        Ok(Some(existing))
    }

    /// Partial merge: strings overwrite only when non-blank, other fields
    /// only when non-null. Version and timestamp move on every call, whether
    /// or not a field changed.
    pub async fn patch(&self, id: Uuid, patch: BeerPatch) -> Result<Option<Beer>, AppError> {
        let Some(mut existing) = self.store.get(id).await? else {
            return Ok(None);
        };
        if let Some(name) = patch.beer_name.as_deref() {
            if !name.trim().is_empty() {
                existing.beer_name = name.to_string();
            }
        }
        if let Some(style) = patch.beer_style {
            existing.beer_style = Some(style);
        }
        if let Some(upc) = patch.upc.as_deref() {
            if !upc.trim().is_empty() {
                existing.upc = Some(upc.to_string());
            }
        }
        if let Some(price) = patch.price {
            existing.price = Some(price);
        }
        if let Some(quantity) = patch.quantity_on_hand {
            existing.quantity_on_hand = Some(quantity);
        }
        existing.version += 1;
        existing.update_date = Utc::now();
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
    use crate::model::BeerStyle;
    use crate::store::memory::MemoryBeerStore;

    fn service() -> BeerService {
        BeerService::new(Arc::new(MemoryBeerStore::new()))
    }

    fn new_beer(name: &str) -> BeerUpsert {
        BeerUpsert {
            beer_name: Some(name.into()),
            beer_style: Some(BeerStyle::Ipa),
            upc: Some("12356".into()),
            price: Some(9.99),
            quantity_on_hand: Some(50),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_version_and_timestamps() {
        let svc = service();
        let a = svc.create(new_beer("A")).await.unwrap();
        let b = svc.create(new_beer("B")).await.unwrap();

        assert_eq!(a.version, 1);
        assert_eq!(b.version, 1);
        assert_ne!(a.id, b.id);
        assert_eq!(a.created_date, a.update_date);
        assert_eq!(svc.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_bumps_version() {
        let svc = service();
        let created = svc.create(new_beer("Before")).await.unwrap();

        let updated = svc
            .update(
                created.id,
                BeerUpsert {
                    beer_name: Some("After".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.beer_name, "After");
        assert_eq!(updated.version, 2);
        // Full replace: fields absent from the input are cleared.
        assert!(updated.beer_style.is_none());
        assert!(updated.price.is_none());
        assert_eq!(updated.created_date, created.created_date);
        assert!(updated.update_date > created.update_date);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_none() {
        let svc = service();
        let result = svc.update(Uuid::new_v4(), new_beer("X")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn patch_overwrites_only_present_fields() {
        let svc = service();
        let created = svc.create(new_beer("Original")).await.unwrap();

        let patched = svc
            .patch(
                created.id,
                BeerPatch {
                    price: Some(4.99),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.beer_name, "Original");
        assert_eq!(patched.beer_style, Some(BeerStyle::Ipa));
        assert_eq!(patched.price, Some(4.99));
        assert_eq!(patched.version, 2);
    }

    #[tokio::test]
    async fn patch_with_blank_name_leaves_name_unchanged() {
        let svc = service();
        let created = svc.create(new_beer("Keep Me")).await.unwrap();

        let patched = svc
            .patch(
                created.id,
                BeerPatch {
                    beer_name: Some("  ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.beer_name, "Keep Me");
        // Version still moves on a no-op patch.
        assert_eq!(patched.version, 2);
    }

    #[tokio::test]
    async fn empty_patch_still_bumps_version_and_timestamp() {
        let svc = service();
        let created = svc.create(new_beer("Static")).await.unwrap();

        let patched = svc
            .patch(created.id, BeerPatch::default())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(patched.version, 2);
        assert!(patched.update_date > created.update_date);

        let again = svc
            .patch(created.id, BeerPatch::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(again.version, 3);
    }

    #[tokio::test]
    async fn delete_reports_prior_existence() {
        let svc = service();
        let created = svc.create(new_beer("Doomed")).await.unwrap();

        assert!(svc.delete(created.id).await.unwrap());
        assert!(!svc.delete(created.id).await.unwrap());
        assert!(svc.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_empty_after_deleting_everything() {
        let svc = service();
        for name in ["A", "B", "C"] {
            svc.create(new_beer(name)).await.unwrap();
        }
        for beer in svc.list(&BeerFilter::default()).await.unwrap() {
            assert!(svc.delete(beer.id).await.unwrap());
        }
        assert!(svc.list(&BeerFilter::default()).await.unwrap().is_empty());
    }
}
