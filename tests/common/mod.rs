#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};

use news_api::{init_db, make_router, run_app, seed::seed, seed::SeedData, Config};
use serde_json::Value;

const TEST_DATA: &str = include_str!("test_data.json");

pub struct TestApp {
    pub address: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get_json(&self, path: &str) -> (u16, Value) {
        let response = self.get(path).await;
        let status = response.status().as_u16();
        (status, response.json().await.expect("body was not JSON"))
    }
}

pub fn get_random_free_port() -> (u16, TcpListener) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Could not bind a free port");
    let port = listener
        .local_addr()
        .expect("Could not read local address")
        .port();
    (port, listener)
}

/// Starts the app on its own freshly seeded in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = init_db(&Config::in_memory())
        .await
        .expect("Failed to initialise database");
    let data = SeedData::from_json(TEST_DATA).expect("test_data.json is invalid");
    seed(&pool, &data).await.expect("Failed to seed database");

    let (port, listener) = get_random_free_port();
    tokio::spawn(run_app(make_router(pool), listener));

    TestApp {
        address: SocketAddr::from(([127, 0, 0, 1], port)),
        client: reqwest::Client::new(),
    }
}

pub fn is_sorted_by<F, K>(items: &[Value], key: F, descending: bool) -> bool
where
    F: Fn(&Value) -> K,
    K: PartialOrd,
{
    items.windows(2).all(|pair| {
        let (a, b) = (key(&pair[0]), key(&pair[1]));
        if descending {
            a >= b
        } else {
            a <= b
        }
    })
}

pub fn str_field(field: &'static str) -> impl Fn(&Value) -> String {
    move |item| item[field].as_str().unwrap_or_default().to_string()
}
