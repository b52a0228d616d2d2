//! Authenticated request construction and execution for the REST API.
//!
//! [`RequestManager`] owns the `reqwest::Client`, derives the base URL
//! `https://{hostname}/{api_resource}/v{api_version}` and attaches basic-auth
//! credentials to every request when they are configured. All resource
//! handlers share one instance through an `Arc`.
//!
//! # Concurrency
//!
//! Setters take `&self` and are safe to call at any time, but a request
//! snapshots the base URL and credentials together, under one lock, when it is
//! built: calls already in flight keep the values they started with. Configure
//! the manager once before issuing concurrent requests.

use crate::config::{BasicAuthConfig, FreeNasConfig, CONTENT_TYPE_JSON};
use crate::error::{ClientError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Query parameters of a request, in the order they are sent.
pub type QueryParams = Vec<(&'static str, String)>;

/// Undecoded response of a call whose body has no fixed model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Body as UTF-8 text, with invalid sequences replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        decode(&self.body)
    }
}

#[derive(Debug, Clone)]
struct Endpoint {
    scheme: &'static str,
    hostname: String,
    api_resource: String,
    api_version: String,
    base_url: String,
    basic_auth: Option<BasicAuthConfig>,
}

impl Endpoint {
    fn update_base_url(&mut self) {
        self.base_url = format!(
            "{}://{}/{}/v{}",
            self.scheme, self.hostname, self.api_resource, self.api_version
        );
    }
}

pub struct RequestManager {
    http: reqwest::Client,
    endpoint: RwLock<Endpoint>,
}

impl RequestManager {
    pub fn new(config: &FreeNasConfig) -> Result<Self> {
        let http = build_http_client(config)?;
        let mut endpoint = Endpoint {
            scheme: if config.use_tls { "https" } else { "http" },
            hostname: config.hostname.clone(),
            api_resource: config.api_resource.clone(),
            api_version: config.api_version.clone(),
            base_url: String::new(),
            basic_auth: config.basic_auth(),
        };
        endpoint.update_base_url();

        Ok(Self {
            http,
            endpoint: RwLock::new(endpoint),
        })
    }

    pub fn hostname(&self) -> String {
        self.read_endpoint().hostname
    }

    pub fn api_resource(&self) -> String {
        self.read_endpoint().api_resource
    }

    pub fn api_version(&self) -> String {
        self.read_endpoint().api_version
    }

    /// The URL every request path is appended to.
    pub fn base_url(&self) -> String {
        self.read_endpoint().base_url
    }

    pub fn set_hostname(&self, hostname: impl Into<String>) {
        self.update_endpoint(|e| e.hostname = hostname.into());
    }

    pub fn set_api_resource(&self, api_resource: impl Into<String>) {
        self.update_endpoint(|e| e.api_resource = api_resource.into());
    }

    pub fn set_api_version(&self, api_version: impl Into<String>) {
        self.update_endpoint(|e| e.api_version = api_version.into());
    }

    pub fn basic_auth(&self) -> Option<BasicAuthConfig> {
        self.read_endpoint().basic_auth
    }

    /// Replace (or with `None`, remove) the credentials sent with each request.
    pub fn set_basic_auth(&self, basic_auth: Option<BasicAuthConfig>) {
        self.endpoint
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .basic_auth = basic_auth;
    }

    /// `limit`/`offset` query parameters used by every list endpoint.
    pub fn limit_offset_params(limit: u32, offset: u32) -> QueryParams {
        vec![("limit", limit.to_string()), ("offset", offset.to_string())]
    }

    fn read_endpoint(&self) -> Endpoint {
        self.endpoint
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_endpoint(&self, apply: impl FnOnce(&mut Endpoint)) {
        let mut endpoint = self
            .endpoint
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        apply(&mut endpoint);
        endpoint.update_base_url();
        debug!("Base URL is now {}", endpoint.base_url);
    }

    /// Build an (authenticated) request for `path` relative to the base URL.
    fn create_request(
        &self,
        path: &str,
        method: Method,
        query: &[(&'static str, String)],
    ) -> Result<reqwest::RequestBuilder> {
        let endpoint = self.read_endpoint();
        let url = Url::parse(&format!("{}{}", endpoint.base_url, path))?;
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(auth) = endpoint.basic_auth {
            request = request.basic_auth(auth.username, Some(auth.password.expose_secret()));
        }

        Ok(request)
    }

    fn create_json_request<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        body: &B,
    ) -> Result<reqwest::RequestBuilder> {
        let json = serde_json::to_vec(body)?;
        trace!("Request body: {}", String::from_utf8_lossy(&json));

        Ok(self
            .create_request(path, method, &[])?
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(json))
    }

    /// Send a request and return the undecoded response.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        query: &[(&'static str, String)],
    ) -> Result<RawResponse> {
        let request = self.create_request(path, method, query)?;
        execute(request).await
    }

    /// Send a request and decode the JSON response into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        self.request(path, method, query).await?.json()
    }

    /// Send a request with a JSON body and return the undecoded response.
    pub async fn request_with_body<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        body: &B,
    ) -> Result<RawResponse> {
        let request = self.create_json_request(path, method, body)?;
        execute(request).await
    }

    /// Send a request with a JSON body and decode the JSON response into `T`.
    pub async fn request_with_body_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: Method,
        body: &B,
    ) -> Result<T> {
        self.request_with_body(path, method, body).await?.json()
    }
}

/// Percent-encode each `/`-separated segment of a resource id for use in a
/// request path. Separators are kept: `tank/media@daily` addresses a nested
/// snapshot.
pub fn encode_path(id: &str) -> String {
    id.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}

fn build_http_client(config: &FreeNasConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(concat!("freenas-api-client/", env!("CARGO_PKG_VERSION")));

    if !config.verify_ssl {
        // Appliances usually ship self-signed certificates
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))
}

async fn execute(request: reqwest::RequestBuilder) -> Result<RawResponse> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;
    debug!("Response status {}", status);
    trace!("Response body: {}", String::from_utf8_lossy(&body));

    if !status.is_success() {
        return Err(ClientError::Http {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    Ok(RawResponse {
        status: status.as_u16(),
        body: body.to_vec(),
    })
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| ClientError::Deserialization {
        message: e.to_string(),
        body: String::from_utf8_lossy(body).into_owned(),
    })
}
