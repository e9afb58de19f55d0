use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::ApiError;
use crate::utils::truncate_body;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use reqwest::{Client as ReqwestClient, ClientBuilder, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Constants for API paths
pub mod api_paths {
    /// Liveness check
    pub const HEALTH: &str = "/health";
    /// Text-only verification
    pub const VERIFY_TEXT: &str = "/api/v1/verify/text";
    /// Image-only verification
    pub const VERIFY_IMAGE: &str = "/api/v1/verify/image";
    /// Multimodal verification
    pub const VERIFY_CONTENT: &str = "/api/v1/verify";
    /// Service statistics and supported formats
    pub const STATS: &str = "/api/v1/stats";
}

/// Longest error body kept in an `UnparseableBackendError`
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Per-request options
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// Extra headers; these override the defaults on conflicting keys
    pub headers: HeaderMap,

    /// Multipart body
    pub form: Option<Form>,
}

/// HTTP client for making API requests
pub struct HttpClient {
    client: ReqwestClient,
    config: Config,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = ClientBuilder::new()
            .user_agent(concat!("mitraverify-rust-sdk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a single request bounded by the configured timeout.
    ///
    /// Status codes are not interpreted here; the raw response is returned.
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("{method} {url}");

        let mut request = self
            .client
            .request(method, &url)
            .headers(merge_headers(options.headers));

        if let Some(form) = options.form {
            request = request.multipart(form);
        }

        // The deadline is dropped with this future whichever way it resolves.
        match tokio::time::timeout(self.config.timeout(), request.send()).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(self.transport_error(err)),
            Err(_elapsed) => Err(self.timeout_error()),
        }
    }

    /// Interpret a response: typed body on success, normalized error otherwise
    pub async fn interpret_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let body = self.read_body(response).await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        Err(backend_error(status.as_u16(), &body))
    }

    /// Read a JSON body without looking at the status
    pub async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let body = self.read_body(response).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Read the full body under a fresh deadline of the configured length
    async fn read_body(&self, response: Response) -> Result<Vec<u8>> {
        match tokio::time::timeout(self.config.timeout(), response.bytes()).await {
            Ok(Ok(body)) => Ok(body.to_vec()),
            Ok(Err(err)) => Err(self.transport_error(err)),
            Err(_elapsed) => Err(self.timeout_error()),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            self.timeout_error()
        } else {
            Error::RequestError(err)
        }
    }

    fn timeout_error(&self) -> Error {
        Error::RequestTimeout {
            timeout_ms: self.config.timeout_ms,
        }
    }

    /// Make a GET request to the specified endpoint
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        self.execute(Method::GET, endpoint, RequestOptions::default())
            .await
    }

    /// Make a POST request with a multipart body to the specified endpoint
    pub async fn post_form(&self, endpoint: &str, form: Form) -> Result<Response> {
        let options = RequestOptions {
            form: Some(form),
            ..Default::default()
        };
        self.execute(Method::POST, endpoint, options).await
    }
}

fn backend_error(status: u16, body: &[u8]) -> Error {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            return Error::UnparseableBackendError {
                status,
                body: truncate_body(&String::from_utf8_lossy(body), MAX_ERROR_BODY_CHARS),
            }
        }
    };

    let detail = match value.get("detail") {
        Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
        Some(Value::String(_)) | Some(Value::Null) | None => format!("API Error: {status}"),
        // FastAPI validation errors carry a list here
        Some(other) => other.to_string(),
    };

    Error::ApiRequestFailed(ApiError {
        detail,
        status_code: status,
    })
}

fn merge_headers(overrides: HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    for key in overrides.keys() {
        headers.remove(key);
    }
    for (key, value) in overrides.iter() {
        headers.append(key, value.clone());
    }

    headers
}
