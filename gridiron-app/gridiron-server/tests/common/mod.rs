#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use config::Map;
use serde_json::Value;
use tower::ServiceExt;

use gridiron_server::{create_app_with, App};
use gridiron_shared::config::AppConfig;

pub const SECRET: &str = "integration-secret";

pub fn config(pairs: &[(&str, &str)]) -> AppConfig {
    let vars: Map<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_env_map(vars).expect("config")
}

pub fn build(pairs: &[(&str, &str)]) -> App {
    create_app_with(&config(pairs)).expect("create app")
}

pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// App backed by a fresh in-memory database with the schema applied.
    pub async fn spawn() -> Self {
        Self::spawn_with(&[("DATABASE_URI", "sqlite://"), ("SECRET_KEY", SECRET)]).await
    }

    pub async fn spawn_with(pairs: &[(&str, &str)]) -> Self {
        let app = build(pairs);
        app.database().initialize().await.expect("migrations");
        Self::from_app(app)
    }

    pub fn from_app(app: App) -> Self {
        Self {
            router: app.into_router(),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    /// Register `username` and return an access token for it.
    pub async fn login_as(&self, username: &str) -> String {
        let credentials = serde_json::json!({ "username": username, "password": "secret123" });
        let (status, _) = self
            .request(Method::POST, "/auth/register", None, Some(credentials.clone()))
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .request(Method::POST, "/auth/login", None, Some(credentials))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().expect("token").to_string()
    }

    pub async fn create_team(&self, token: &str, name: &str, abbreviation: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/teams",
                token,
                serde_json::json!({
                    "name": name,
                    "city": name.split(' ').next().unwrap_or(name),
                    "abbreviation": abbreviation,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().expect("team id")
    }
}
