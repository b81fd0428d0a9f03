use anyhow::{Context, Result};
use model::user::{User, UserRole};
use sqlx::{Pool, Postgres};

#[derive(Debug, Default)]
pub struct UpdateProfileOptions {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
}

/// Partial profile update; absent fields keep their current value
#[tracing::instrument(skip(db, options))]
pub async fn update_profile(
    db: &Pool<Postgres>,
    id: i64,
    options: UpdateProfileOptions,
) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = COALESCE($2, username),
            email = COALESCE($3, email),
            phone = COALESCE($4, phone),
            full_name = COALESCE($5, full_name),
            role = COALESCE($6, role),
            updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(options.username)
    .bind(options.email)
    .bind(options.phone)
    .bind(options.full_name)
    .bind(options.role)
    .fetch_optional(db)
    .await
    .context("unable to update user profile")?;

    Ok(user)
}

/// Flips the account's active flag, returning the new value
#[tracing::instrument(skip(db))]
pub async fn toggle_active(db: &Pool<Postgres>, id: i64) -> Result<Option<bool>> {
    let active = sqlx::query_as::<_, (bool,)>(
        r#"
        UPDATE users
        SET is_active = NOT is_active, updated_at = now()
        WHERE id = $1
        RETURNING is_active
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
    .context("unable to toggle user active flag")?;

    Ok(active.map(|(is_active,)| is_active))
}

/// Marks the account verified and stamps the verification date
#[tracing::instrument(skip(db))]
pub async fn mark_verified(db: &Pool<Postgres>, id: i64) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET is_verified = TRUE, verification_date = now(), updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await
    .context("unable to mark user verified")?;

    Ok(result.rows_affected() > 0)
}
