use chrono::Utc;
use sqlx::{Sqlite, SqlitePool};

use crate::{data_formats::CommentRequest, errors::RequestError, models::Comment};

use super::is_foreign_key_violation;

pub async fn get_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, RequestError> {
    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id, body, article_id, author, votes, created_at
        FROM comments
        WHERE article_id = $1
        ORDER BY created_at DESC, comment_id DESC
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?;
    Ok(result)
}

/// Inserts a comment with zero votes. An unknown article or username trips a
/// foreign key and comes back as `NotFound`.
pub async fn add_comment_to_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    CommentRequest { body, username }: CommentRequest,
) -> Result<Comment, RequestError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (body, article_id, author, votes, created_at)
        VALUES ($1, $2, $3, 0, $4)
        RETURNING comment_id, body, article_id, author, votes, created_at
        "#,
    )
    .bind(body)
    .bind(article_id)
    .bind(username)
    .bind(Utc::now())
    .fetch_one(&mut tx)
    .await
    .map_err(RequestError::from)
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            RequestError::NotFound("Not found!")
        } else {
            e
        }
    })?;
    tx.commit().await?;
    Ok(result)
}

/// Returns how many rows were removed; zero means the comment never existed.
pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<u64, RequestError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        r#"
        DELETE FROM comments WHERE comment_id = $1
        "#,
    )
    .bind(comment_id)
    .execute(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(result.rows_affected())
}
