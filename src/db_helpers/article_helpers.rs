use sqlx::{Sqlite, SqlitePool};

use crate::errors::RequestError;
use crate::models::{Article, ArticleRow};
use crate::validation::ArticleListQuery;

use super::QueryBuilder;

const ARTICLE_QUERY: &str = r#"
            SELECT articles.article_id                AS "article_id",
                   articles.title                     AS "title",
                   articles.topic                     AS "topic",
                   articles.author                    AS "author",
                   articles.body                      AS "body",
                   articles.created_at                AS "created_at",
                   articles.votes                     AS "votes",
                   Count(comments.comment_id)         AS "comment_count"
            FROM   articles
                LEFT JOIN comments
                        ON comments.article_id = articles.article_id
     "#;

pub async fn list_articles_in_db(
    pool: &SqlitePool,
    ArticleListQuery {
        sort_by,
        order,
        topic,
    }: ArticleListQuery,
) -> Result<Vec<Article>, RequestError> {
    let order_by = format!(
        "ORDER BY {} {}, articles.article_id ASC",
        sort_by.column(),
        order.keyword()
    );
    let (query, params) = QueryBuilder::new(ARTICLE_QUERY)
        .add_param("articles.topic", topic)
        .push("GROUP BY articles.article_id")
        .push(&order_by)
        .build();

    let mut query = sqlx::query_as::<Sqlite, Article>(&query);
    for param in params {
        query = query.bind(param);
    }
    let result = query.fetch_all(pool).await?;
    Ok(result)
}

pub async fn get_article_by_id_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Option<Article>, RequestError> {
    let (query, _) = QueryBuilder::new(ARTICLE_QUERY)
        .push("WHERE articles.article_id = $1")
        .push("GROUP BY articles.article_id")
        .build();

    let result = sqlx::query_as::<Sqlite, Article>(&query)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    Ok(result)
}

pub async fn article_exists_in_db(pool: &SqlitePool, article_id: i64) -> Result<bool, RequestError> {
    let article = sqlx::query_scalar::<Sqlite, i64>(
        r#"SELECT article_id FROM articles WHERE article_id = $1"#,
    )
    .bind(article_id)
    .fetch_optional(pool)
    .await?;
    Ok(article.is_some())
}

/// Adds `inc_votes` to the stored count in a single statement. Votes may go negative.
///
/// SQLite silently promotes an overflowing integer sum to REAL, so the update
/// only applies while the sum stays an integer. An existing article that was
/// not updated would have overflowed.
pub async fn update_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Option<ArticleRow>, RequestError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query_as::<Sqlite, ArticleRow>(
        r#"
        UPDATE articles
        SET votes = votes + $1
        WHERE article_id = $2 AND typeof(votes + $1) = 'integer'
        RETURNING article_id, title, topic, author, body, created_at, votes
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(&mut tx)
    .await?;

    if result.is_none() {
        let exists = sqlx::query_scalar::<Sqlite, i64>(
            r#"SELECT article_id FROM articles WHERE article_id = $1"#,
        )
        .bind(article_id)
        .fetch_optional(&mut tx)
        .await?
        .is_some();
        if exists {
            return Err(RequestError::BadRequest("Bad request"));
        }
    }
    tx.commit().await?;
    Ok(result)
}
