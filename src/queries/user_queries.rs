use sqlx::PgPool;

use crate::{error::Result, models::User};

pub async fn find_by_google_id(pool: &PgPool, google_id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE google_id = $1")
        .bind(google_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn create_google_user(
    pool: &PgPool,
    google_id: &str,
    email: &str,
    name: &str,
    picture: Option<&str>,
) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (google_id, email, name, picture) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(google_id)
    .bind(email)
    .bind(name)
    .bind(picture)
    .fetch_one(pool)
    .await?;

    Ok(user)
}
