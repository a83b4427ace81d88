mod common;

use common::{is_sorted_by, spawn_app, str_field};
use serde_json::json;

#[tokio::test]
async fn lists_articles_with_comment_counts() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles").await;
    assert_eq!(status, 200);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 13);
    for article in articles {
        for key in [
            "author",
            "title",
            "article_id",
            "topic",
            "created_at",
            "votes",
            "comment_count",
        ] {
            assert!(article.get(key).is_some(), "missing {} in {}", key, article);
        }
    }
    let first = articles.iter().find(|a| a["article_id"] == 1).unwrap();
    assert_eq!(first["comment_count"], 11);
    let second = articles.iter().find(|a| a["article_id"] == 2).unwrap();
    assert_eq!(second["comment_count"], 0);
}

#[tokio::test]
async fn articles_are_newest_first_by_default() {
    let app = spawn_app().await;
    let (_, body) = app.get_json("/api/articles").await;
    let articles = body["articles"].as_array().unwrap();
    assert!(is_sorted_by(articles, str_field("created_at"), true));
    assert_eq!(articles[0]["article_id"], 3);
}

#[tokio::test]
async fn articles_can_be_sorted_by_author_ascending() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?sort_by=author&order=ASC").await;
    assert_eq!(status, 200);
    let articles = body["articles"].as_array().unwrap();
    assert!(is_sorted_by(articles, str_field("author"), false));
}

#[tokio::test]
async fn articles_can_be_sorted_by_votes_and_comment_count() {
    let app = spawn_app().await;
    let (_, body) = app.get_json("/api/articles?sort_by=votes").await;
    let articles = body["articles"].as_array().unwrap();
    assert!(is_sorted_by(articles, |a| a["votes"].as_i64().unwrap(), true));
    assert_eq!(articles[0]["article_id"], 1);

    let (_, body) = app.get_json("/api/articles?sort_by=comment_count&order=asc").await;
    let articles = body["articles"].as_array().unwrap();
    assert!(is_sorted_by(articles, |a| a["comment_count"].as_i64().unwrap(), false));
}

#[tokio::test]
async fn invalid_sort_by_is_rejected() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?sort_by=nonsense").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "invalid sort query");
}

#[tokio::test]
async fn invalid_order_is_rejected() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?sort_by=author&order=nonsense").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "invalid sort query");
}

#[tokio::test]
async fn articles_can_be_filtered_by_topic() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?topic=cats").await;
    assert_eq!(status, 200);
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert!(articles.iter().all(|a| a["topic"] == "cats"));
}

#[tokio::test]
async fn known_topic_without_articles_gets_a_message() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?topic=paper").await;
    assert_eq!(status, 200);
    assert_eq!(body["msg"], "No articles with this topic yet!");
    assert!(body.get("articles").is_none());
}

#[tokio::test]
async fn unknown_topic_is_rejected() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?topic=999").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "invalid filter query");
}

#[tokio::test]
async fn gets_single_article_with_comment_count() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles/1").await;
    assert_eq!(status, 200);
    let article = body["article"].as_array().unwrap();
    assert_eq!(article.len(), 1);
    let article = &article[0];
    assert_eq!(article["article_id"], 1);
    assert_eq!(article["author"], "butter_bridge");
    assert_eq!(article["topic"], "mitch");
    assert_eq!(article["votes"], 100);
    assert_eq!(article["comment_count"], 11);
    assert!(article["title"].is_string());
    assert!(article["body"].is_string());
    assert!(article["created_at"].is_string());
}

#[tokio::test]
async fn every_article_id_round_trips() {
    let app = spawn_app().await;
    let (_, list) = app.get_json("/api/articles").await;
    for listed in list["articles"].as_array().unwrap() {
        let id = listed["article_id"].as_i64().unwrap();
        let (status, body) = app.get_json(&format!("/api/articles/{}", id)).await;
        assert_eq!(status, 200);
        assert_eq!(body["article"][0]["article_id"], id);
        assert_eq!(body["article"][0]["comment_count"], listed["comment_count"]);
    }
}

#[tokio::test]
async fn missing_article_is_not_found() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles/99999").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found!");
}

#[tokio::test]
async fn non_numeric_article_id_is_bad_request() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles/not-an-id").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "Bad request");
}

#[tokio::test]
async fn patch_adds_to_existing_votes() {
    let app = spawn_app().await;
    let response = app
        .client
        .patch(app.url("/api/articles/1"))
        .json(&json!({ "inc_votes": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["article"]["article_id"], 1);
    assert_eq!(body["article"]["votes"], 102);
    assert_eq!(body["article"]["author"], "butter_bridge");
    assert!(body["article"]["created_at"].is_string());

    let (_, body) = app.get_json("/api/articles/1").await;
    assert_eq!(body["article"][0]["votes"], 102);
}

#[tokio::test]
async fn patch_can_take_votes_below_zero() {
    let app = spawn_app().await;
    let response = app
        .client
        .patch(app.url("/api/articles/2"))
        .json(&json!({ "inc_votes": -5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["article"]["votes"], -5);
}

#[tokio::test]
async fn patch_rejects_bad_input() {
    let app = spawn_app().await;
    let cases = [
        ("/api/articles/99999", json!({ "inc_votes": 2 }), 404, "Not found"),
        ("/api/articles/not-an-id", json!({ "inc_votes": 2 }), 400, "Bad request"),
        ("/api/articles/1", json!({}), 400, "Bad request"),
        ("/api/articles/1", json!({ "inc_votes": "hello" }), 400, "Bad request"),
        ("/api/articles/1", json!({ "inc_votes": 1.5 }), 400, "Bad request"),
    ];
    for (path, payload, status, msg) in cases {
        let response = app
            .client
            .patch(app.url(path))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), status, "{} {}", path, payload);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["msg"], msg, "{} {}", path, payload);
    }

    let (_, body) = app.get_json("/api/articles/1").await;
    assert_eq!(body["article"][0]["votes"], 100);
}

#[tokio::test]
async fn patch_that_would_overflow_votes_is_bad_request() {
    let app = spawn_app().await;
    let response = app
        .client
        .patch(app.url("/api/articles/1"))
        .json(&json!({ "inc_votes": i64::MAX }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["msg"], "Bad request");

    let (_, body) = app.get_json("/api/articles/1").await;
    assert_eq!(body["article"][0]["votes"], 100);

    let response = app
        .client
        .patch(app.url("/api/articles/99999"))
        .json(&json!({ "inc_votes": i64::MAX }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn negative_article_id_is_numeric_but_missing() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles/-3").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found!");

    let (status, body) = app.get_json("/api/articles/-3/comments").await;
    assert_eq!(status, 404);
    assert_eq!(body["msg"], "article not found!");
}

#[tokio::test]
async fn undecodable_article_id_is_bad_request_json() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles/%FF").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "Bad request");

    let (status, body) = app.get_json("/api/articles/%FF/comments").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "Bad request");
}

#[tokio::test]
async fn malformed_query_string_is_bad_request_json() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?topic=cats&topic=mitch").await;
    assert_eq!(status, 400);
    assert_eq!(body["msg"], "Bad request");
}

#[tokio::test]
async fn sort_ties_are_broken_by_article_id() {
    let app = spawn_app().await;
    let (status, body) = app.get_json("/api/articles?sort_by=topic&order=ASC").await;
    assert_eq!(status, 200);
    let articles = body["articles"].as_array().unwrap();
    assert!(is_sorted_by(articles, str_field("topic"), false));
    for pair in articles.windows(2) {
        if pair[0]["topic"] == pair[1]["topic"] {
            assert!(
                pair[0]["article_id"].as_i64() < pair[1]["article_id"].as_i64(),
                "{} before {}",
                pair[0]["article_id"],
                pair[1]["article_id"]
            );
        }
    }
    assert_eq!(articles[0]["topic"], "cats");

    // articles 12 and 13 share a created_at
    let (_, body) = app.get_json("/api/articles").await;
    let ids: Vec<i64> = body["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["article_id"].as_i64().unwrap())
        .collect();
    let twelve = ids.iter().position(|&id| id == 12).unwrap();
    let thirteen = ids.iter().position(|&id| id == 13).unwrap();
    assert_eq!(thirteen, twelve + 1);
}
