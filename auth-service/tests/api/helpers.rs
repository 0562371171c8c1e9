use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::Algorithm;
use reqwest::header::{AUTHORIZATION, COOKIE};
use reqwest::{Client, Response};
use serde::Serialize;
use test_context::AsyncTestContext;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use renovation_auth::app_state::AppState;
use renovation_auth::domain::{
    LoginRequestBody, LoginResponse, RegisterRequestBody, RegisterResponse, UpdateProfileRequestBody,
    UserId, VerifyTokenRequestBody,
};
use renovation_auth::services::{HashmapUserStore, ManualClock, SigningKeys, SystemClock, TokenService};
use renovation_auth::utils::{Config, DEFAULT_ACCESS_COOKIE_NAME};
use renovation_auth::Application;

pub const TEST_SECRET: &[u8] = b"renovation-catalog-api-test-secret";
pub const TEST_TTL_SECONDS: i64 = 1800;
pub const PASSWORD: &str = "Password123!";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = Config::new(TEST_SECRET, Algorithm::HS256, TEST_TTL_SECONDS)
            .expect("valid test config");
        let user_store = Arc::new(RwLock::new(HashmapUserStore::new()));
        let app_state = AppState::from_config(config, user_store, Arc::new(SystemClock));

        let app = Application::build(app_state, "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str, role: Option<&str>) -> Response {
        let body = RegisterRequestBody {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
            role: role.map(str::to_owned),
        };
        self.post_json("/api/register", &body).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Response {
        let body = LoginRequestBody {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        self.post_json("/api/login", &body).await
    }

    pub async fn verify_token(&self, token: &str) -> Response {
        let body = VerifyTokenRequestBody {
            token: token.to_owned(),
        };
        self.post_json("/verify-token", &body).await
    }

    pub async fn get_user(&self, id: i64) -> Response {
        self.http_client
            .get(format!("{}/api/users/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute get user request.")
    }

    pub async fn get_profile(&self, token: Option<&str>) -> Response {
        self.authorized(self.http_client.get(self.url("/profile")), token)
            .send()
            .await
            .expect("Failed to execute get profile request.")
    }

    pub async fn get_profile_with_cookie(&self, token: &str) -> Response {
        self.http_client
            .get(self.url("/profile"))
            .header(COOKIE, format!("{}={}", DEFAULT_ACCESS_COOKIE_NAME, token))
            .send()
            .await
            .expect("Failed to execute get profile request.")
    }

    pub async fn get_profile_with_header(&self, authorization: &str) -> Response {
        self.http_client
            .get(self.url("/profile"))
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .expect("Failed to execute get profile request.")
    }

    pub async fn update_profile(&self, token: &str, body: &UpdateProfileRequestBody) -> Response {
        self.http_client
            .put(self.url("/profile"))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute update profile request.")
    }

    pub async fn delete_profile(&self, token: &str) -> Response {
        self.http_client
            .delete(self.url("/profile"))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute delete profile request.")
    }

    pub async fn list_users(&self, token: Option<&str>) -> Response {
        self.authorized(self.http_client.get(self.url("/admin/users")), token)
            .send()
            .await
            .expect("Failed to execute list users request.")
    }

    /// Register a fresh account with `role` and log it in. Returns the new
    /// user's id and access token.
    pub async fn signed_in_user(&self, role: Option<&str>) -> (UserId, String) {
        let email = get_random_email();
        let response = self.register("Test User", &email, PASSWORD, role).await;
        assert_eq!(response.status().as_u16(), 201);
        let registered = response
            .json::<RegisterResponse>()
            .await
            .expect("Could not deserialize register response");

        let response = self.login(&email, PASSWORD).await;
        assert_eq!(response.status().as_u16(), 200);
        let login = response
            .json::<LoginResponse>()
            .await
            .expect("Could not deserialize login response");

        (registered.id, login.access_token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", &self.address, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Response {
        self.http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap_or_else(|e| panic!("Failed to execute POST {}: {}", path, e))
    }
}

/// A token service sharing the server's secret whose clock reads `now`.
pub fn token_service_at(now: DateTime<Utc>) -> TokenService {
    TokenService::new(
        Arc::new(SigningKeys::new(TEST_SECRET, Algorithm::HS256)),
        Duration::seconds(TEST_TTL_SECONDS),
        Arc::new(ManualClock::at(now)),
    )
}

pub fn get_random_email() -> String {
    format!("{}@example.com", Uuid::new_v4())
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> TestContext {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}
