use anyhow::{Context, Result};
use model::user::{User, UserRole};
use sqlx::{Pool, Postgres};

#[derive(Debug)]
pub struct CreateUserOptions {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: String,
    pub role: UserRole,
    pub is_staff: bool,
    pub is_verified: bool,
}

#[tracing::instrument(skip(db, options))]
pub async fn create_user(db: &Pool<Postgres>, options: CreateUserOptions) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users
            (username, email, password_hash, full_name, phone, role, is_staff,
             is_verified, verification_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8,
                CASE WHEN $8 THEN now() ELSE NULL END)
        RETURNING *
        "#,
    )
    .bind(&options.username)
    .bind(&options.email)
    .bind(&options.password_hash)
    .bind(&options.full_name)
    .bind(&options.phone)
    .bind(options.role)
    .bind(options.is_staff)
    .bind(options.is_verified)
    .fetch_one(db)
    .await
    .context("unable to create user")?;

    Ok(user)
}

/// True when the username or email is already taken
#[tracing::instrument(skip(db))]
pub async fn login_exists(db: &Pool<Postgres>, username: &str, email: &str) -> Result<bool> {
    let (exists,) = sqlx::query_as::<_, (bool,)>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM users
            WHERE username = $1 OR lower(email) = lower($2)
        )
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_one(db)
    .await
    .context("unable to check login availability")?;

    Ok(exists)
}
