use axum_macros::FromRef;
use keja_auth::JwtKeys;
use keja_mailer::Mailer;
use paystack_client::PaystackClient;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::Config;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db: PgPool,
    pub jwt: JwtKeys,
    pub paystack: Arc<PaystackClient>,
    pub mailer: Arc<Mailer>,
    pub config: Arc<Config>,
}
