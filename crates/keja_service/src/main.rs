use crate::api::context::AppState;
use crate::config::{Config, Environment};
use anyhow::Context;
use keja_auth::JwtKeys;
use keja_mailer::Mailer;
use paystack_client::PaystackClient;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod constants;
mod utils;

#[tokio::main]
#[tracing::instrument(err)]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    // Parse our configuration from the environment.
    let config = Config::from_env().context("expected to be able to generate config")?;

    init_tracing(config.environment);
    tracing::trace!("initialized config");

    let (min_connections, max_connections): (u32, u32) = match config.environment {
        Environment::Production => (5, 30),
        Environment::Develop => (3, 20),
        Environment::Local => (3, 10),
    };

    let db = PgPoolOptions::new()
        .min_connections(min_connections)
        .max_connections(max_connections)
        .connect(&config.database_url)
        .await
        .context("could not connect to db")?;

    tracing::trace!(
        min_connections,
        max_connections,
        "initialized db connection"
    );

    sqlx::migrate!()
        .run(&db)
        .await
        .context("unable to run migrations")?;

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    let mailer = Mailer::new(
        aws_sdk_sesv2::Client::new(&aws_config),
        &config.from_email,
        &config.support_email,
    );
    tracing::trace!("initialized mailer");

    let mut paystack = PaystackClient::new(&config.paystack_secret_key);
    if let Some(base_url) = &config.paystack_base_url {
        paystack = paystack.base_url(base_url.clone());
    }

    let jwt = JwtKeys::new(&config.jwt_secret);

    let port = config.port;
    let app_state = AppState {
        db,
        jwt,
        paystack: Arc::new(paystack),
        mailer: Arc::new(mailer),
        config: Arc::new(config),
    };

    let listener = TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .context("unable to bind listener")?;
    tracing::info!(port, "keja service listening");

    axum::serve(listener, api::service(app_state))
        .await
        .context("server exited")?;

    Ok(())
}

/// Pretty, file-and-line logs locally; flattened JSON everywhere else
fn init_tracing(environment: Environment) {
    match environment {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
