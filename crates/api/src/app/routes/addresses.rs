use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use resido_core::AddressId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::authz;
use crate::context::CallerContext;

/// Every address route requires a bearer token; mutations additionally run
/// the owner check against the resolved record.
pub fn router() -> Router {
    Router::new()
        .route("/", post(create_address).get(list_addresses))
        .route("/:id", get(get_address).patch(update_address).delete(remove_address))
}

pub async fn create_address(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Json(body): Json<dto::CreateAddressRequest>,
) -> axum::response::Response {
    // The owner is the verified caller, never a payload field.
    match services.addresses.create(body.into(), caller.user_id()).await {
        Ok(detail) => (StatusCode::CREATED, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_addresses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.addresses.find_all().await {
        Ok(items) => {
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_address(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: AddressId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid address id");
        }
    };

    match services.addresses.find_one(id).await {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_address(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateAddressRequest>,
) -> axum::response::Response {
    let id: AddressId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid address id");
        }
    };

    // Resolve first: a missing address is 404, a foreign one is 401.
    let current = match services.addresses.find_one(id).await {
        Ok(detail) => detail,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = authz::require_address_owner(&caller, current.owner.id) {
        return errors::authz_error_to_response(e);
    }

    match services.addresses.update(id, body.into()).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_address(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(caller): Extension<CallerContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: AddressId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid address id");
        }
    };

    let current = match services.addresses.find_one(id).await {
        Ok(detail) => detail,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = authz::require_address_owner(&caller, current.owner.id) {
        return errors::authz_error_to_response(e);
    }

    match services.addresses.remove(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
