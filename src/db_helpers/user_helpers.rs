use sqlx::SqlitePool;

use crate::errors::RequestError;
use crate::models::User;

pub async fn get_users_in_db(pool: &SqlitePool) -> Result<Vec<User>, RequestError> {
    let result = sqlx::query_as::<_, User>(
        r#"
        SELECT username, name, avatar_url FROM users
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(result)
}
