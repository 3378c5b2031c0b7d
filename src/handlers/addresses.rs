use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::{AddressRequest, AddressResponse};
use crate::response::{ok, Data};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<Json<Data<AddressResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let address = state
        .address_service
        .create(contact_id, &auth.username, req)
        .await?;
    Ok(Json(Data::new(address)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((contact_id, address_id)): Path<(i64, i64)>,
) -> Result<Json<Data<AddressResponse>>, ApiError> {
    let address = state
        .address_service
        .get_by_id(address_id, contact_id, &auth.username)
        .await?;
    Ok(Json(Data::new(address)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((contact_id, address_id)): Path<(i64, i64)>,
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<Json<Data<AddressResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let address = state
        .address_service
        .update(address_id, contact_id, &auth.username, req)
        .await?;
    Ok(Json(Data::new(address)))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((contact_id, address_id)): Path<(i64, i64)>,
) -> Result<Json<Data<&'static str>>, ApiError> {
    state
        .address_service
        .delete(address_id, contact_id, &auth.username)
        .await?;
    Ok(Json(ok()))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
) -> Result<Json<Data<Vec<AddressResponse>>>, ApiError> {
    let addresses = state
        .address_service
        .list(contact_id, &auth.username)
        .await?;
    Ok(Json(Data::new(addresses)))
}
