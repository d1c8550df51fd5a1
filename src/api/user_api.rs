use super::client::{ApiClient, ApiError};
use crate::test_data::UserRecord;
use reqwest::Response;

const FORM_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/x-www-form-urlencoded");

/// Domain operations over the storefront account API.
///
/// Every call overrides the wrapper's JSON default: this API only accepts
/// form-urlencoded bodies.
#[derive(Clone, Debug)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The underlying generic client, for endpoints outside the account API.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    #[tracing::instrument(name = "Creating account via API", skip_all, fields(email = %user.email))]
    pub async fn create_account(&self, user: &UserRecord) -> Result<Response, ApiError> {
        let body = serde_urlencoded::to_string(user)?;
        self.client
            .post("/api/createAccount", Some(body), &[FORM_CONTENT_TYPE])
            .await
    }

    /// The endpoint answers 200 for every outcome; success, unknown user and
    /// wrong credentials are distinguished by the `message` field of the body,
    /// never by the status code.
    #[tracing::instrument(name = "Verifying login via API", skip_all, fields(email = %email))]
    pub async fn verify_login(&self, email: &str, password: &str) -> Result<Response, ApiError> {
        let body = serde_urlencoded::to_string([("email", email), ("password", password)])?;
        self.client
            .post("/api/verifyLogin", Some(body), &[FORM_CONTENT_TYPE])
            .await
    }

    #[tracing::instrument(name = "Deleting account via API", skip_all, fields(email = %email))]
    pub async fn delete_account(&self, email: &str, password: &str) -> Result<Response, ApiError> {
        let body = serde_urlencoded::to_string([("email", email), ("password", password)])?;
        self.client
            .delete("/api/deleteAccount", Some(body), &[FORM_CONTENT_TYPE])
            .await
    }
}
