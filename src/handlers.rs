use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::{StatusCode, Uri},
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        ArticleQueryParams, ArticleResponse, ArticleWrapper, CommentRequest, CommentResponse,
        CommentWrapper, MultipleArticlesWrapper, MultipleCommentsWrapper, TopicsWrapper,
        UpdateVotesRequest, UsersWrapper,
    },
    db_helpers::{
        add_comment_to_article_in_db, article_exists_in_db, delete_comment_in_db,
        get_article_by_id_in_db, get_comments_for_article_in_db, get_topic_by_slug_in_db,
        get_topics_in_db, get_users_in_db, list_articles_in_db, update_article_votes_in_db,
    },
    errors::RequestError,
    validation::{parse_id, ArticleListQuery},
    JsonResponse,
};

type JsonResult<T> = Result<Json<T>, RequestError>;

const ENDPOINTS: &str = include_str!("../endpoints.json");

/// Any body that fails to deserialize into the expected shape is a bad request,
/// whatever the underlying reason.
fn body_or_bad_request<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, RequestError> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Rejected body: {}", rejection);
            Err(RequestError::BadRequest("Bad request"))
        }
    }
}

/// Ids that cannot even be extracted (e.g. invalid UTF-8) are rejected the
/// same way as ids that do not parse.
fn id_or_bad_request(id: Result<Path<String>, PathRejection>) -> Result<i64, RequestError> {
    match id {
        Ok(Path(id)) => parse_id(&id),
        Err(rejection) => {
            tracing::debug!("Rejected path: {}", rejection);
            Err(RequestError::BadRequest("Bad request"))
        }
    }
}

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> RequestError {
    tracing::debug!("No route for {}", uri);
    RequestError::NotFound("Route not found!")
}

pub async fn get_endpoints() -> JsonResult<serde_json::Value> {
    let endpoints = serde_json::from_str(ENDPOINTS).map_err(|e| {
        tracing::error!("endpoints.json is not valid JSON: {}", e);
        RequestError::ServerError
    })?;
    Ok(Json(endpoints))
}

// ----------------- Topic & User Handlers -----------------
pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = get_topics_in_db(&pool).await?;
    Ok(Json(TopicsWrapper {
        topics: topics.into_iter().map(Into::into).collect(),
    }))
}

pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = get_users_in_db(&pool).await?;
    Ok(Json(UsersWrapper {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

// ----------------- Article Handlers -----------------
pub async fn list_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    params: Result<Query<ArticleQueryParams>, QueryRejection>,
) -> JsonResult<MultipleArticlesWrapper> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Rejected query: {}", rejection);
        RequestError::BadRequest("Bad request")
    })?;
    let query = ArticleListQuery::try_from(params)?;
    if let Some(topic) = &query.topic {
        if get_topic_by_slug_in_db(&pool, topic).await?.is_none() {
            return Err(RequestError::BadRequest("invalid filter query"));
        }
    }
    let filtered = query.topic.is_some();

    let articles = list_articles_in_db(&pool, query).await?;
    if filtered && articles.is_empty() {
        return Ok(Json(MultipleArticlesWrapper::Message {
            msg: "No articles with this topic yet!".to_string(),
        }));
    }
    Ok(Json(MultipleArticlesWrapper::Articles {
        articles: articles.into_iter().map(Into::into).collect(),
    }))
}

pub async fn get_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    article_id: Result<Path<String>, PathRejection>,
) -> JsonResult<ArticleWrapper<Vec<ArticleResponse>>> {
    let article_id = id_or_bad_request(article_id)?;
    let article = get_article_by_id_in_db(&pool, article_id)
        .await?
        .ok_or(RequestError::NotFound("article not found!"))?;
    Ok(Json(ArticleWrapper::wrap_with_article_data(vec![
        article.into()
    ])))
}

pub async fn patch_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    article_id: Result<Path<String>, PathRejection>,
    body: Result<Json<UpdateVotesRequest>, JsonRejection>,
) -> JsonResult<ArticleWrapper<ArticleResponse>> {
    let article_id = id_or_bad_request(article_id)?;
    let UpdateVotesRequest { inc_votes } = body_or_bad_request(body)?;
    let article = update_article_votes_in_db(&pool, article_id, inc_votes)
        .await?
        .ok_or(RequestError::NotFound("Not found"))?;
    Ok(Json(ArticleWrapper::wrap_with_article_data(article.into())))
}

// ----------------- Comment Handlers -----------------
pub async fn get_article_comments(
    Extension(pool): Extension<Arc<SqlitePool>>,
    article_id: Result<Path<String>, PathRejection>,
) -> JsonResult<MultipleCommentsWrapper> {
    let article_id = id_or_bad_request(article_id)?;
    if !article_exists_in_db(&pool, article_id).await? {
        return Err(RequestError::NotFound("article not found!"));
    }
    let comments = get_comments_for_article_in_db(&pool, article_id).await?;
    Ok(Json(MultipleCommentsWrapper {
        comments: comments.into_iter().map(Into::into).collect(),
    }))
}

pub async fn post_article_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    article_id: Result<Path<String>, PathRejection>,
    body: Result<Json<CommentRequest>, JsonRejection>,
) -> Result<JsonResponse<CommentWrapper<CommentResponse>>, RequestError> {
    let article_id = id_or_bad_request(article_id)?;
    let request = body_or_bad_request(body)?;
    let comment = add_comment_to_article_in_db(&pool, article_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentWrapper::wrap_with_comment_data(comment.into())),
    ))
}

pub async fn delete_comment(
    Extension(pool): Extension<Arc<SqlitePool>>,
    comment_id: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, RequestError> {
    let comment_id = id_or_bad_request(comment_id)?;
    match delete_comment_in_db(&pool, comment_id).await? {
        0 => Err(RequestError::NotFound("Unable to delete non-existent comment")),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}
