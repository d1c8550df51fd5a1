//! A minimal storefront standing in for the public site so the suite can run
//! hermetically. It implements exactly the external interface the scenarios
//! exercise: the five JSON/form API endpoints, the three UI routes and
//! session-cookie login.

pub mod routes;
pub mod state;

use crate::configuration::FixtureSettings;
use axum::Router;
use axum::routing::{delete, get, post};
use state::StoreState;
use tower_http::trace::TraceLayer;

pub struct Application {
    port: u16,
    listener: tokio::net::TcpListener,
}

impl Application {
    pub async fn build(settings: &FixtureSettings) -> Result<Self, anyhow::Error> {
        let listener =
            tokio::net::TcpListener::bind((settings.host.as_str(), settings.port)).await?;
        let port = listener.local_addr()?.port();
        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let app = router(StoreState::new());
        axum::serve(self.listener, app).await
    }
}

pub fn router(state: StoreState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/products", get(routes::products))
        .route("/login", get(routes::login_form).post(routes::login))
        .route("/logout", get(routes::logout))
        .route("/signup", post(routes::signup))
        .route("/api/productsList", get(routes::products_list))
        .route("/api/brandsList", get(routes::brands_list))
        .route("/api/createAccount", post(routes::create_account))
        .route("/api/verifyLogin", post(routes::verify_login))
        .route("/api/deleteAccount", delete(routes::delete_account))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
