use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Article, ArticleRow, Comment, Topic, User};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TopicResponse {
    pub slug: String,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArticleResponse {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub comment_id: i64,
    pub body: String,
    pub article_id: i64,
    pub author: String,
    pub votes: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(Topic { slug, description }: Topic) -> Self {
        TopicResponse { slug, description }
    }
}

impl From<User> for UserResponse {
    fn from(
        User {
            username,
            name,
            avatar_url,
        }: User,
    ) -> Self {
        UserResponse {
            username,
            name,
            avatar_url,
        }
    }
}

impl From<Article> for ArticleResponse {
    fn from(
        Article {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            comment_count,
        }: Article,
    ) -> Self {
        ArticleResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            comment_count: Some(comment_count),
        }
    }
}

impl From<ArticleRow> for ArticleResponse {
    fn from(
        ArticleRow {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
        }: ArticleRow,
    ) -> Self {
        ArticleResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            comment_count: None,
        }
    }
}

impl From<Comment> for CommentResponse {
    fn from(
        Comment {
            comment_id,
            body,
            article_id,
            author,
            votes,
            created_at,
        }: Comment,
    ) -> Self {
        CommentResponse {
            comment_id,
            body,
            article_id,
            author,
            votes,
            created_at,
        }
    }
}
