//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store wiring + the authentication flow
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and mapping into domain inputs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(jwt_secret: String) -> Router {
    let jwt = Arc::new(resido_auth::Hs256JwtValidator::new(
        jwt_secret.clone().into_bytes(),
    ));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::build_services(&jwt_secret));

    // Protected routes: bearer token required before any handler logic runs.
    let protected = Router::new()
        .route("/whoami", get(routes::system::whoami))
        .nest("/address", routes::addresses::router())
        .merge(routes::users::protected_router())
        .route_layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/auth", routes::login::router())
        .merge(routes::users::public_router())
        .merge(protected)
        .layer(Extension(services))
}
