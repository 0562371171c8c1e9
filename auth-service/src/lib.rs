use std::future::{Future, IntoFuture};
use std::{error::Error, pin::Pin};

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use app_state::AppState;
use routes::{admin, login, profile, register, users, verify_token};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/register", post(register::register))
        .route("/api/login", post(login::login))
        .route("/api/users/:user_id", get(users::get_user))
        .route(
            "/profile",
            get(profile::get_profile)
                .put(profile::update_profile)
                .delete(profile::delete_profile),
        )
        .route("/verify-token", post(verify_token::verify_token))
        .route("/admin/users", get(admin::list_users))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    /// Bind the listener. Port 0 picks a free port; `address` reports the
    /// one actually bound.
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;

        let router = app_router(app_state);
        let http_future = axum::serve(listener, router).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", local_addr),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        info!(address = %self.address, "listening");
        self.http_future.await
    }
}
