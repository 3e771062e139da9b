//! reqwest-backed [`ResourceApi`] for the console backend.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use log::warn;
use reqwest::Client;
use reqwest::Method;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::ResourceApi;
use super::decode_error;
use super::decode_payload;
use crate::config::HttpConfig;
use crate::error::ApiError;
use crate::model::FormData;
use crate::model::Resource;
use crate::model::ScopeId;

/// HTTP verb used for updates; some endpoints take partial `PATCH` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    Put,
    Patch,
}

/// A resource served by a REST collection endpoint.
///
/// The collection path may contain a `{scope}` placeholder, replaced by the
/// scope identifier. Item paths are `<collection>{id}/`.
pub trait RemoteResource: Resource + DeserializeOwned {
    /// Form payload sent on create and update.
    type Form: FormData + Serialize;

    /// Collection path, e.g. `/api/category/{scope}/items/`.
    const COLLECTION_PATH: &'static str;

    /// Verb used by [`ResourceApi::update`].
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Put;
}

/// Shared HTTP client for the console backend.
///
/// This client is cheap to clone (uses `Arc` internally); one instance is
/// shared by the per-resource [`HttpResourceApi`] handles.
///
/// # Example
///
/// ```ignore
/// use resource_table::api::HttpClient;
/// use resource_table::config::HttpConfig;
/// use resource_table::resources::Item;
///
/// let client = HttpClient::new(HttpConfig::from_env())?;
/// let items = client.resource::<Item>();
/// ```
#[derive(Clone)]
pub struct HttpClient {
    inner: Arc<HttpClientInner>,
}

struct HttpClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
    bearer_token: Option<String>,
}

impl HttpClient {
    /// Creates a client from configuration.
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;
        Self::with_client(config, http_client)
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(config: HttpConfig, http_client: Client) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        Ok(Self {
            inner: Arc::new(HttpClientInner {
                base_url,
                http_client,
                timeout: config.timeout,
                bearer_token: config.bearer_token,
            }),
        })
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns an API handle for one resource type.
    pub fn resource<R: RemoteResource>(&self) -> HttpResourceApi<R> {
        HttpResourceApi {
            client: self.clone(),
            _resource: PhantomData,
        }
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{method} {url}");
        let mut request = self.inner.http_client.request(method, url);
        if let Some(token) = &self.inner.bearer_token {
            request = request.bearer_auth(token);
        }
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }
        request
    }

    /// Sends a request and returns the status and body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request.send().await.map_err(|e| self.map_transport(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_transport(e))?;

        if status.is_success() {
            Ok((status.as_u16(), body))
        } else {
            warn!("request failed with HTTP {status}");
            Err(decode_error(status.as_u16(), &body))
        }
    }

    fn map_transport(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

/// [`ResourceApi`] implementation for one [`RemoteResource`] type.
pub struct HttpResourceApi<R> {
    client: HttpClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for HttpResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: RemoteResource> HttpResourceApi<R> {
    /// URL of the scope's collection.
    pub fn collection_url(&self, scope: &ScopeId) -> Result<Url, ApiError> {
        self.client.url(&collection_path(R::COLLECTION_PATH, scope))
    }

    /// URL of a single resource within the scope's collection.
    pub fn item_url(&self, scope: &ScopeId, id: &R::Id) -> Result<Url, ApiError> {
        let path = format!("{}{id}/", collection_path(R::COLLECTION_PATH, scope));
        self.client.url(&path)
    }
}

fn collection_path(template: &str, scope: &ScopeId) -> String {
    template.replace("{scope}", scope.as_str())
}

#[async_trait]
impl<R: RemoteResource> ResourceApi for HttpResourceApi<R> {
    type Resource = R;
    type Form = R::Form;

    async fn list(&self, scope: &ScopeId) -> Result<Vec<R>, ApiError> {
        let request = self.client.request(Method::GET, self.collection_url(scope)?);
        let (status, body) = self.client.send(request).await?;
        decode_payload(status, &body)
    }

    async fn create(&self, scope: &ScopeId, form: &R::Form) -> Result<R, ApiError> {
        let request = self
            .client
            .request(Method::POST, self.collection_url(scope)?)
            .json(form);
        let (status, body) = self.client.send(request).await?;
        decode_payload(status, &body)
    }

    async fn update(&self, scope: &ScopeId, id: &R::Id, form: &R::Form) -> Result<R, ApiError> {
        let method = match R::UPDATE_METHOD {
            UpdateMethod::Put => Method::PUT,
            UpdateMethod::Patch => Method::PATCH,
        };
        let request = self
            .client
            .request(method, self.item_url(scope, id)?)
            .json(form);
        let (status, body) = self.client.send(request).await?;
        decode_payload(status, &body)
    }

    async fn delete(&self, scope: &ScopeId, id: &R::Id) -> Result<(), ApiError> {
        let request = self.client.request(Method::DELETE, self.item_url(scope, id)?);
        self.client.send(request).await?;
        Ok(())
    }
}
