use sqlx::SqlitePool;

use crate::errors::RequestError;
use crate::models::Topic;

pub async fn get_topics_in_db(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let result = sqlx::query_as::<_, Topic>(
        r#"
        SELECT slug, description FROM topics
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(result)
}

pub async fn get_topic_by_slug_in_db(
    pool: &SqlitePool,
    slug: &str,
) -> Result<Option<Topic>, RequestError> {
    let result = sqlx::query_as::<_, Topic>(
        r#"
        SELECT slug, description FROM topics WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;
    Ok(result)
}
