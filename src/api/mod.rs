// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::time::Duration;

use axum::{
    extract::Request,
    http::{
        header::{ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, CONTENT_LENGTH},
        HeaderValue, Method, StatusCode,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{LoginRequest, LoginResponse, UserCredentials, UserProfile},
    state::AppState,
};

pub mod login;
pub mod users;

/// How long browsers may cache a preflight response.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Request headers browsers may send cross-origin, as listed on preflights.
pub const PREFLIGHT_ALLOW_HEADERS: &str = "Origin,Content-Type,Authorization";

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/login", post(login::login))
        .route("/users", get(users::list_users))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/swagger").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(middleware::from_fn(finish_preflight))
        // tower-http refuses `allow_credentials(true)` alongside a wildcard
        // origin, so the credentials header is set outside the CORS layer.
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_CREDENTIALS,
            HeaderValue::from_static("true"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin policy shared by every route.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .expose_headers([CONTENT_LENGTH])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Completes the preflight responses produced by [`cors_layer`].
///
/// tower-http answers every `OPTIONS` request itself with a 200 and emits
/// header names lowercased. Preflights here are 204 and list the allowed
/// headers in their canonical casing.
async fn finish_preflight(request: Request, next: Next) -> Response {
    let is_preflight = request.method() == Method::OPTIONS;
    let mut response = next.run(request).await;

    if is_preflight {
        *response.status_mut() = StatusCode::NO_CONTENT;
        response.headers_mut().insert(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(PREFLIGHT_ALLOW_HEADERS),
        );
    }

    response
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hackers Auth API",
        version = "1.0",
        description = "A simple authentication service for demo purposes"
    ),
    paths(login::login, users::list_users),
    components(schemas(LoginRequest, LoginResponse, UserProfile, UserCredentials)),
    tags(
        (name = "auth", description = "Login and token issuance"),
        (name = "users", description = "Demo user discovery")
    )
)]
pub struct ApiDoc;
