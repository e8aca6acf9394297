//! Resource routes, mounted under `/api/v1`.

use crate::handlers::{
    create_beer, create_customer, delete_beer_by_id, delete_customer_by_id, get_beer_by_id,
    get_customer_by_id, list_beers, list_customers, patch_beer_by_id, patch_customer_by_id,
    update_beer_by_id, update_customer_by_id,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/beer", get(list_beers).post(create_beer))
        .route(
            "/beer/:beer_id",
            get(get_beer_by_id)
                .put(update_beer_by_id)
                .patch(patch_beer_by_id)
                .delete(delete_beer_by_id),
        )
        .route("/customer", get(list_customers).post(create_customer))
        .route(
            "/customer/:customer_id",
            get(get_customer_by_id)
                .put(update_customer_by_id)
                .patch(patch_customer_by_id)
                .delete(delete_customer_by_id),
        )
        .with_state(state)
}
