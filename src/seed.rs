//! Resets the database to a known data set.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub topics: Vec<TopicSeed>,
    pub users: Vec<UserSeed>,
    pub articles: Vec<ArticleSeed>,
    pub comments: Vec<CommentSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicSeed {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSeed {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSeed {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i64,
}

/// `article_id` refers to the 1-based position of the article in [`SeedData::articles`].
#[derive(Debug, Clone, Deserialize)]
pub struct CommentSeed {
    pub body: String,
    pub article_id: i64,
    pub author: String,
    #[serde(default)]
    pub votes: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Wipes all four tables and inserts `data` in a single transaction.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<()> {
    let mut tx = pool.begin().await?;
    for table in ["comments", "articles", "users", "topics"] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut tx)
            .await?;
    }

    for topic in &data.topics {
        sqlx::query("INSERT INTO topics (slug, description) VALUES ($1, $2)")
            .bind(&topic.slug)
            .bind(&topic.description)
            .execute(&mut tx)
            .await?;
    }
    for user in &data.users {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.name)
            .bind(&user.avatar_url)
            .execute(&mut tx)
            .await?;
    }
    for (index, article) in data.articles.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO articles (article_id, title, topic, author, body, created_at, votes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(index as i64 + 1)
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .execute(&mut tx)
        .await?;
    }
    for (index, comment) in data.comments.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, body, article_id, author, votes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(index as i64 + 1)
        .bind(&comment.body)
        .bind(comment.article_id)
        .bind(&comment.author)
        .bind(comment.votes)
        .bind(comment.created_at)
        .execute(&mut tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "Seeded database"
    );
    Ok(())
}
