//! Whitelisting of path and query parameters before anything reaches the database.

use std::str::FromStr;

use crate::{errors::RequestError, ArticleQueryParams};

const INVALID_SORT: RequestError = RequestError::BadRequest("invalid sort query");

/// Parses an `:article_id` or `:comment_id` path segment.
pub fn parse_id(raw: &str) -> Result<i64, RequestError> {
    raw.parse::<i64>()
        .map_err(|_| RequestError::BadRequest("Bad request"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    ArticleId,
    Title,
    Topic,
    Author,
    Body,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortField {
    /// The SQL expression this field orders by. Never built from user input.
    pub fn column(self) -> &'static str {
        match self {
            SortField::ArticleId => "articles.article_id",
            SortField::Title => "articles.title",
            SortField::Topic => "articles.topic",
            SortField::Author => "articles.author",
            SortField::Body => "articles.body",
            SortField::CreatedAt => "articles.created_at",
            SortField::Votes => "articles.votes",
            SortField::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortField {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "article_id" => Ok(SortField::ArticleId),
            "title" => Ok(SortField::Title),
            "topic" => Ok(SortField::Topic),
            "author" => Ok(SortField::Author),
            "body" => Ok(SortField::Body),
            "created_at" => Ok(SortField::CreatedAt),
            "votes" => Ok(SortField::Votes),
            "comment_count" => Ok(SortField::CommentCount),
            _ => Err(INVALID_SORT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = RequestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(INVALID_SORT)
        }
    }
}

/// A list query that passed the whitelist. The topic still has to be checked
/// against the topics table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub sort_by: SortField,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl TryFrom<ArticleQueryParams> for ArticleListQuery {
    type Error = RequestError;

    fn try_from(
        ArticleQueryParams {
            sort_by,
            order,
            topic,
        }: ArticleQueryParams,
    ) -> Result<Self, Self::Error> {
        let sort_by = match sort_by {
            Some(value) => value.parse()?,
            None => SortField::default(),
        };
        let order = match order {
            Some(value) => value.parse()?,
            None => SortOrder::default(),
        };
        Ok(ArticleListQuery {
            sort_by,
            order,
            topic,
        })
    }
}
