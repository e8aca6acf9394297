//! Seed data loader: inserts fixed sample rows at startup when a store is
//! empty. Safe to call again; a non-empty store is left untouched.

use crate::error::AppError;
use crate::model::{BeerStyle, BeerUpsert, CustomerUpsert};
use crate::state::AppState;

pub async fn load_seed_data(state: &AppState) -> Result<(), AppError> {
    load_beer_data(state).await?;
    load_customer_data(state).await?;
    Ok(())
}

async fn load_beer_data(state: &AppState) -> Result<(), AppError> {
    if state.beers.count().await? != 0 {
        return Ok(());
    }
    let samples = [
        BeerUpsert {
            beer_name: Some("Galaxy Cat".into()),
            beer_style: Some(BeerStyle::PaleAle),
            upc: Some("12356".into()),
            price: Some(12.99),
            quantity_on_hand: Some(122),
        },
        BeerUpsert {
            beer_name: Some("Crank".into()),
            beer_style: Some(BeerStyle::PaleAle),
            upc: Some("12356222".into()),
            price: Some(11.99),
            quantity_on_hand: Some(392),
        },
        BeerUpsert {
            beer_name: Some("Sunshine City".into()),
            beer_style: Some(BeerStyle::Ipa),
            upc: Some("12356".into()),
            price: Some(13.99),
            quantity_on_hand: Some(144),
        },
    ];
    for sample in samples {
        state.beers.create(sample).await?;
    }
    tracing::info!("seeded 3 beers");
    Ok(())
}

async fn load_customer_data(state: &AppState) -> Result<(), AppError> {
    if state.customers.count().await? != 0 {
        return Ok(());
    }
    for name in ["mahmoud", "khaled", "ahmed"] {
        state
            .customers
            .create(CustomerUpsert {
                customer_name: Some(name.into()),
            })
            .await?;
    }
    tracing::info!("seeded 3 customers");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{BeerFilter, CustomerFilter};

    #[tokio::test]
    async fn seeds_three_of_each_resource() {
        let state = AppState::in_memory();
        load_seed_data(&state).await.unwrap();

        let beers = state.beers.list(&BeerFilter::default()).await.unwrap();
        assert_eq!(beers.len(), 3);
        assert!(beers.iter().all(|b| b.version == 1));
        assert!(beers.iter().any(|b| b.beer_name == "Galaxy Cat"));

        let customers = state
            .customers
            .list(&CustomerFilter::default())
            .await
            .unwrap();
        assert_eq!(customers.len(), 3);
    }

    #[tokio::test]
    async fn second_run_is_a_no_op() {
        let state = AppState::in_memory();
        load_seed_data(&state).await.unwrap();
        load_seed_data(&state).await.unwrap();

        assert_eq!(state.beers.count().await.unwrap(), 3);
        assert_eq!(state.customers.count().await.unwrap(), 3);
    }
}
