use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, http::StatusCode, response::IntoResponse, routing::post,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/login", post(login))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let identity = match services
        .validate_credentials(&body.email, &body.password)
        .await
    {
        Ok(Some(identity)) => identity,
        // An unknown email and a wrong password get the same answer.
        Ok(None) => {
            return errors::json_error(
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "invalid email or password",
            );
        }
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.issue_token(&identity.email).await {
        Ok(token) => {
            (StatusCode::OK, Json(serde_json::json!({ "token": token }))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
