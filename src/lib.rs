use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod response;
pub mod security;
pub mod services;
pub mod state;
pub mod validation;

use state::AppState;

/// Build the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(public_routes(state.clone()))
        .merge(protected_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn public_routes(state: AppState) -> Router {
    use handlers::users;

    Router::new()
        .route("/api/users", post(users::register))
        .route("/api/users/login", post(users::login))
        .with_state(state)
}

fn protected_routes(state: AppState) -> Router {
    use handlers::{addresses, contacts, users};

    Router::new()
        // User session
        .route(
            "/api/users/current",
            get(users::get_current).patch(users::update_current),
        )
        .route("/api/users/logout", delete(users::logout))
        // Contacts
        .route(
            "/api/contacts",
            post(contacts::create).get(contacts::search),
        )
        .route(
            "/api/contacts/:contact_id",
            get(contacts::get_by_id)
                .put(contacts::update)
                .delete(contacts::remove),
        )
        // Addresses, nested under their owning contact
        .route(
            "/api/contacts/:contact_id/addresses",
            post(addresses::create).get(addresses::list),
        )
        .route(
            "/api/contacts/:contact_id/addresses/:address_id",
            get(addresses::get_by_id)
                .put(addresses::update)
                .delete(addresses::remove),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
        .with_state(state)
}
