use crate::storefront::state::StoreState;
use crate::test_data::UserRecord;
use axum::Json;
use axum::extract::{Form, State};

/// Response envelope used by the account API. The HTTP status is 200 for
/// every outcome; callers distinguish outcomes by `message`. This mirrors the
/// public Automation Exercise API and the suite depends on it.
#[derive(serde::Serialize)]
pub struct ApiMessage {
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    pub message: String,
}

impl ApiMessage {
    fn new(response_code: u16, message: &str) -> Json<Self> {
        Json(Self {
            response_code,
            message: message.to_string(),
        })
    }
}

#[derive(serde::Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub async fn products_list(State(state): State<StoreState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "products": state.catalog() }))
}

pub async fn brands_list(State(state): State<StoreState>) -> Json<serde_json::Value> {
    let brands: Vec<_> = state
        .brands()
        .into_iter()
        .enumerate()
        .map(|(id, brand)| serde_json::json!({ "id": id + 1, "brand": brand }))
        .collect();
    Json(serde_json::json!({ "brands": brands }))
}

#[tracing::instrument(name = "POST /api/createAccount", skip_all, fields(email = %record.email))]
pub async fn create_account(
    State(state): State<StoreState>,
    Form(record): Form<UserRecord>,
) -> Json<ApiMessage> {
    if state.register(&record) {
        ApiMessage::new(201, "User created!")
    } else {
        ApiMessage::new(400, "Email already exists!")
    }
}

#[tracing::instrument(name = "POST /api/verifyLogin", skip_all, fields(email = %credentials.email))]
pub async fn verify_login(
    State(state): State<StoreState>,
    Form(credentials): Form<Credentials>,
) -> Json<ApiMessage> {
    if state.credentials_valid(&credentials.email, &credentials.password) {
        ApiMessage::new(200, "User exists!")
    } else {
        ApiMessage::new(404, "User not found!")
    }
}

#[tracing::instrument(name = "DELETE /api/deleteAccount", skip_all, fields(email = %credentials.email))]
pub async fn delete_account(
    State(state): State<StoreState>,
    Form(credentials): Form<Credentials>,
) -> Json<ApiMessage> {
    if state.delete_user(&credentials.email, &credentials.password) {
        ApiMessage::new(200, "Account deleted!")
    } else {
        ApiMessage::new(404, "Account not found!")
    }
}
