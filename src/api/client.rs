use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid header `{name}`")]
    InvalidHeader { name: String },
    #[error("failed to form-encode the request body")]
    Encoding(#[from] serde_urlencoded::ser::Error),
    #[error("unexpected status code: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },
    #[error("failed to deserialize the response body")]
    MalformedBody(#[source] reqwest::Error),
}

/// Thin verb-method wrapper over `reqwest`.
///
/// Adds nothing in the way of resilience: no retries, no timeout handling
/// beyond what the underlying client was built with.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http_client: Client,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            base_url,
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, path: &str, headers: &[(&str, &str)]) -> Result<Response, ApiError> {
        self.send(Method::GET, path, None, headers).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        self.send(Method::POST, path, body, headers).await
    }

    pub async fn put(
        &self,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        self.send(Method::PUT, path, body, headers).await
    }

    pub async fn patch(
        &self,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        self.send(Method::PATCH, path, body, headers).await
    }

    pub async fn delete(
        &self,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        self.send(Method::DELETE, path, body, headers).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        headers: &[(&str, &str)],
    ) -> Result<Response, ApiError> {
        let url = self.url_for(path);

        // Body-bearing requests default to JSON; caller-supplied headers are
        // inserted afterwards so they win on key collision.
        let mut header_map = HeaderMap::new();
        if body.is_some() {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        for (name, value) in headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|_| ApiError::InvalidHeader {
                    name: (*name).to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader {
                    name: (*name).to_string(),
                })?;
            header_map.insert(header_name, header_value);
        }

        let mut builder = self.http_client.request(method, &url).headers(header_map);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        builder
            .send()
            .await
            .map_err(|source| ApiError::Transport { url, source })
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }
}

/// Fail with the expected/actual pair when the status code does not match.
pub fn verify_status_code(response: &Response, expected: u16) -> Result<(), ApiError> {
    let actual = response.status().as_u16();
    if actual == expected {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus { expected, actual })
    }
}

/// Parse the response body as JSON into the requested type.
pub async fn response_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json().await.map_err(ApiError::MalformedBody)
}
