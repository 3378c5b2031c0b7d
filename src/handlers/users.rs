use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::models::{
    LoginResponse, UserLoginRequest, UserRegisterRequest, UserResponse, UserUpdateRequest,
};
use crate::response::{ok, Data};
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<UserRegisterRequest>, JsonRejection>,
) -> Result<Json<Data<UserResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let user = state.user_service.register(req).await?;
    Ok(Json(Data::new(user)))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<UserLoginRequest>, JsonRejection>,
) -> Result<Json<Data<LoginResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let login = state.user_service.login(req).await?;
    Ok(Json(Data::new(login)))
}

pub async fn get_current(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Data<UserResponse>>, ApiError> {
    let user = state.user_service.get_current(&auth.username).await?;
    Ok(Json(Data::new(user)))
}

pub async fn update_current(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    payload: Result<Json<UserUpdateRequest>, JsonRejection>,
) -> Result<Json<Data<UserResponse>>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;
    let user = state.user_service.update(&auth.username, req).await?;
    Ok(Json(Data::new(user)))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Data<&'static str>>, ApiError> {
    state.user_service.logout(&auth.username).await?;
    Ok(Json(ok()))
}
