use std::time::Duration;

use catalog_core::{Breed, Image};
use catalog_logging::{catalog_debug, catalog_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::urls::{redacted, CatApiUrls, DEFAULT_BASE_URL};
use crate::ApiError;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The four calls the catalog makes against the remote service.
///
/// `None` arguments use the service defaults (10 random cats on page 0, 12 breed
/// images); `Some(0)` is a distinct request and is sent as-is.
#[async_trait::async_trait]
pub trait CatSource: Send + Sync {
    async fn random_cats(&self, limit: Option<u32>, page: Option<u32>) -> Result<Vec<Image>, ApiError>;

    async fn breeds(&self) -> Result<Vec<Breed>, ApiError>;

    async fn breed_images(&self, breed_id: &str, limit: Option<u32>) -> Result<Vec<Image>, ApiError>;

    async fn cat_by_id(&self, id: &str) -> Result<Image, ApiError>;
}

/// `CatSource` over HTTP. No retries and no caching.
#[derive(Debug, Clone)]
pub struct ReqwestCatSource {
    urls: CatApiUrls,
    client: reqwest::Client,
}

impl ReqwestCatSource {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            urls: CatApiUrls::new(&settings.base_url, settings.api_key.clone()),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let shown = redacted(&url);
        catalog_debug!("GET {}", shown);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let err = ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            };
            catalog_warn!("GET {} failed: {}", shown, err);
            return Err(err);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait::async_trait]
impl CatSource for ReqwestCatSource {
    async fn random_cats(&self, limit: Option<u32>, page: Option<u32>) -> Result<Vec<Image>, ApiError> {
        let url = self.urls.random_cats(limit, page)?;
        self.get_json(url).await
    }

    async fn breeds(&self) -> Result<Vec<Breed>, ApiError> {
        let url = self.urls.breeds()?;
        self.get_json(url).await
    }

    async fn breed_images(&self, breed_id: &str, limit: Option<u32>) -> Result<Vec<Image>, ApiError> {
        let url = self.urls.breed_images(breed_id, limit)?;
        self.get_json(url).await
    }

    async fn cat_by_id(&self, id: &str) -> Result<Image, ApiError> {
        let url = self.urls.cat_by_id(id)?;
        self.get_json(url).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Transport(format!("timeout: {err}"));
    }
    ApiError::Transport(err.to_string())
}
