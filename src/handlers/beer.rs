//! Beer handlers: map verbs to service calls, absence to 404.

use crate::error::AppError;
use crate::model::{Beer, BeerPatch, BeerStyle, BeerUpsert};
use crate::service::validation;
use crate::state::AppState;
use crate::store::BeerFilter;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerListParams {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub async fn list_beers(
    State(state): State<AppState>,
    Query(params): Query<BeerListParams>,
) -> Result<Json<Vec<Beer>>, AppError> {
    let filter = BeerFilter {
        beer_name: params.beer_name,
        beer_style: params.beer_style,
        limit: params.limit,
        offset: params.offset,
    };
    let beers = state.beers.list(&filter).await?;
    Ok(Json(beers))
}

pub async fn get_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
) -> Result<Json<Beer>, AppError> {
    tracing::debug!(%beer_id, "get beer by id");
    let beer = state
        .beers
        .get_by_id(beer_id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(beer))
}

pub async fn create_beer(
    State(state): State<AppState>,
    Json(body): Json<BeerUpsert>,
) -> Result<impl IntoResponse, AppError> {
    validation::validate_beer_upsert(&body)?;
    let beer = state.beers.create(body).await?;
    let location = format!("/api/v1/beer/{}", beer.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(beer)))
}

pub async fn update_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
    Json(body): Json<BeerUpsert>,
) -> Result<StatusCode, AppError> {
    validation::validate_beer_upsert(&body)?;
    state
        .beers
        .update(beer_id, body)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn patch_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
    Json(body): Json<BeerPatch>,
) -> Result<StatusCode, AppError> {
    validation::validate_beer_patch(&body)?;
    state
        .beers
        .patch(beer_id, body)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_beer_by_id(
    State(state): State<AppState>,
    Path(beer_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.beers.delete(beer_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
