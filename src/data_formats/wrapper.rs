use serde::Serialize;

use super::response::{ArticleResponse, CommentResponse, TopicResponse, UserResponse};

#[derive(Debug, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<TopicResponse>,
}

#[derive(Debug, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Serialize)]
pub struct ArticleWrapper<T> {
    pub article: T,
}

#[derive(Debug, Serialize)]
pub struct CommentWrapper<T> {
    pub comment: T,
}

#[derive(Debug, Serialize)]
pub struct MultipleCommentsWrapper {
    pub comments: Vec<CommentResponse>,
}

/// Body of `GET /api/articles`: either the matching articles, or a notice when
/// a known topic has nothing filed under it yet.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MultipleArticlesWrapper {
    Articles { articles: Vec<ArticleResponse> },
    Message { msg: String },
}

impl<T> ArticleWrapper<T> {
    pub fn wrap_with_article_data(article: T) -> ArticleWrapper<T> {
        ArticleWrapper { article }
    }
}

impl<T> CommentWrapper<T> {
    pub fn wrap_with_comment_data(comment: T) -> CommentWrapper<T> {
        CommentWrapper { comment }
    }
}
