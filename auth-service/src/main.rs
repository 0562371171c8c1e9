use std::sync::Arc;

use renovation_auth::app_state::AppState;
use renovation_auth::services::{HashmapUserStore, SystemClock};
use renovation_auth::utils::telemetry::init_tracing;
use renovation_auth::utils::Config;
use renovation_auth::Application;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env().expect("Failed to load config");
    let address = config.bind_address().to_owned();

    let user_store = Arc::new(RwLock::new(HashmapUserStore::default()));
    let app_state = AppState::from_config(config, user_store, Arc::new(SystemClock));

    let app = Application::build(app_state, &address)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}
