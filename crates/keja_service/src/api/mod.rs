use axum::{middleware::from_fn_with_state, routing::IntoMakeService, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod admin;
pub mod context;
mod favorites;
mod health;
mod inquiries;
mod listings;
mod messages;
mod password_reset;
mod payments;
mod spa;
mod swagger;
mod tokens;
mod users;
mod verification;

use context::AppState;

type Service = IntoMakeService<Router>;

pub fn service(app_state: AppState) -> Service {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The decode middleware only fills in the caller identity; each handler
    // decides what it requires through the extractors.
    let api = Router::new()
        .nest("/users", users::router())
        .nest("/token", tokens::router())
        .nest("/password-reset", password_reset::router())
        .nest("/listings", listings::router())
        .nest("/payments", payments::router())
        .nest("/verification", verification::router())
        .nest("/favorites", favorites::router())
        .nest("/inquiries", inquiries::router())
        .nest("/messages", messages::router())
        .nest("/admin", admin::router())
        .layer(from_fn_with_state(
            app_state.jwt.clone(),
            keja_auth::middleware::decode_jwt,
        ));

    let app = Router::new()
        .nest("/api", api)
        .nest_service(
            "/assets",
            ServeDir::new(app_state.config.frontend_dist.join("assets")),
        )
        .nest_service("/media", ServeDir::new(app_state.config.media_root.clone()))
        .fallback(spa::serve_spa_handler)
        .with_state(app_state)
        .merge(health::router())
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    app.into_make_service()
}
