use axum::{
    routing::{get, post},
    Router,
};

use crate::api::context::AppState;

pub mod listings;
pub mod recent_activities;
pub mod review_verification;
pub mod stats;
pub mod users;

/// Staff-only surface; every handler takes the [keja_auth::Staff] extractor
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats::admin_stats_handler))
        .route(
            "/recent_activities",
            get(recent_activities::recent_activities_handler),
        )
        .route("/users", get(users::all_users_handler))
        .route("/users", post(users::create_user_handler))
        .route(
            "/users/:id/toggle_active",
            post(users::toggle_active_handler),
        )
        .route("/users/:id/verify", post(users::verify_user_handler))
        .route("/listings", get(listings::all_listings_handler))
        .route(
            "/verification/:id/review",
            post(review_verification::review_verification_handler),
        )
}
