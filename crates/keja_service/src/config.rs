use anyhow::Context;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// The environment the service is running in. Unknown or missing values fall
/// back to Production so a misconfigured box never runs with local settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Develop,
    Local,
}

impl Environment {
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" | "production" => Ok(Environment::Production),
            "dev" | "develop" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// The configuration parameters for the application, pulled from environment
/// variables at startup.
pub struct Config {
    /// The connection URL for the Postgres database this application should use.
    pub database_url: String,
    /// The port to listen for HTTP requests on.
    pub port: u16,
    /// The environment we are in
    pub environment: Environment,
    /// Paystack secret key, sent as a bearer token on every gateway call
    pub paystack_secret_key: String,
    /// Override for the Paystack host, used against a stub gateway locally
    pub paystack_base_url: Option<String>,
    /// HS256 signing secret for access, refresh and password-reset tokens
    pub jwt_secret: String,
    /// Public URL of the frontend; used in emails, payment callbacks and
    /// social preview tags
    pub frontend_url: String,
    /// Sender address for transactional email
    pub from_email: String,
    /// Support address shown in email footers
    pub support_email: String,
    /// Directory uploaded media is written to and served from
    pub media_root: PathBuf,
    /// Directory holding the built SPA bundle
    pub frontend_dist: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be provided")?;
        let port = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;
        let environment = Environment::new_or_prod();

        let paystack_secret_key =
            std::env::var("PAYSTACK_SECRET_KEY").context("PAYSTACK_SECRET_KEY must be provided")?;
        let paystack_base_url = std::env::var("PAYSTACK_BASE_URL").ok();

        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be provided")?;

        let frontend_url =
            std::env::var("FRONTEND_URL").context("FRONTEND_URL must be provided")?;

        let from_email = std::env::var("FROM_EMAIL").context("FROM_EMAIL must be provided")?;
        let support_email =
            std::env::var("SUPPORT_EMAIL").unwrap_or("info@kejahunt.co.ke".to_string());

        let media_root = PathBuf::from(std::env::var("MEDIA_ROOT").unwrap_or("media".to_string()));
        let frontend_dist = PathBuf::from(
            std::env::var("FRONTEND_DIST").unwrap_or("frontend/dist".to_string()),
        );

        Ok(Config {
            database_url,
            port,
            environment,
            paystack_secret_key,
            paystack_base_url,
            jwt_secret,
            frontend_url,
            from_email,
            support_email,
            media_root,
            frontend_dist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_known_values() {
        assert_eq!("prod".parse(), Ok(Environment::Production));
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert_eq!("develop".parse(), Ok(Environment::Develop));
        assert_eq!("local".parse(), Ok(Environment::Local));
        assert_eq!("staging".parse::<Environment>(), Err(()));
    }
}
