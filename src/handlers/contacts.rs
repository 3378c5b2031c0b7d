use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::{ContactRequest, ContactResponse, ContactSearchQuery, ContactSearchResponse};
use crate::response::{ok, Data};
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Data<ContactResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let contact = state.contact_service.create(&auth.username, req).await?;
    Ok(Json(Data::new(contact)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
) -> Result<Json<Data<ContactResponse>>, ApiError> {
    let contact = state
        .contact_service
        .get_by_id(contact_id, &auth.username)
        .await?;
    Ok(Json(Data::new(contact)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<Data<ContactResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let contact = state
        .contact_service
        .update(contact_id, &auth.username, req)
        .await?;
    Ok(Json(Data::new(contact)))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(contact_id): Path<i64>,
) -> Result<Json<Data<&'static str>>, ApiError> {
    state
        .contact_service
        .delete(contact_id, &auth.username)
        .await?;
    Ok(Json(ok()))
}

/// Search is the one endpoint whose body is not wrapped in the plain data
/// envelope: paging metadata sits next to the data array.
pub async fn search(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    query: Result<Query<ContactSearchQuery>, QueryRejection>,
) -> Result<Json<ContactSearchResponse>, ApiError> {
    // An undecodable query string behaves like no query string at all.
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let result = state.contact_service.search(&auth.username, query).await?;
    Ok(Json(result))
}
