mod config;
mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;
pub mod seed;
mod validation;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use config::Config;
pub use data_formats::*;
use handlers::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::{net::TcpListener, str::FromStr, sync::Arc};
use tower_http::trace::TraceLayer;

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, listener: TcpListener) -> Result<()> {
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::Server::from_tcp(listener)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(config: &Config) -> Result<SqlitePool> {
    let db_url = config.database_url.as_str();
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .with_context(|| format!("Failed to create database {}", db_url))?;
    } else {
        tracing::info!("Database already exists");
    }

    let options = SqliteConnectOptions::from_str(db_url)
        .with_context(|| format!("Invalid DATABASE_URL {}", db_url))?
        .foreign_keys(true);
    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
    if config.is_in_memory() {
        // every connection to sqlite::memory: opens a separate database
        pool_options = pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running Migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(pool)
}

pub fn make_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/check_health", get(alive).fallback(not_found))
        .route("/api", get(get_endpoints).fallback(not_found))
        .route("/api/topics", get(get_topics).fallback(not_found))
        .route("/api/users", get(get_users).fallback(not_found))
        .route("/api/articles", get(list_articles).fallback(not_found))
        .route(
            "/api/articles/:article_id",
            get(get_article).patch(patch_article).fallback(not_found),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_article_comments)
                .post(post_article_comment)
                .fallback(not_found),
        )
        .route(
            "/api/comments/:comment_id",
            delete(delete_comment).fallback(not_found),
        )
        .fallback(not_found)
        .layer(Extension(Arc::new(pool)))
        .layer(TraceLayer::new_for_http())
}
