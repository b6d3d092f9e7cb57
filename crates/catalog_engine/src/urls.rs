use url::Url;

use crate::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.thecatapi.com/v1";
pub const API_KEY_PARAM: &str = "api_key";

pub const DEFAULT_RANDOM_LIMIT: u32 = 10;
pub const DEFAULT_RANDOM_PAGE: u32 = 0;
pub const DEFAULT_BREED_IMAGES_LIMIT: u32 = 12;

/// Builds request URLs: base + endpoint, then the credential, then caller params in order.
#[derive(Debug, Clone)]
pub struct CatApiUrls {
    base_url: String,
    api_key: String,
}

impl CatApiUrls {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Absent (`None`) params are skipped; `0` and `false` are sent verbatim.
    pub fn build(&self, endpoint: &str, params: &[(&str, Option<String>)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint))
            .map_err(|err| ApiError::InvalidUrl(format!("{}{}: {err}", self.base_url, endpoint)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(API_KEY_PARAM, &self.api_key);
            for (key, value) in params {
                if let Some(value) = value {
                    query.append_pair(key, value);
                }
            }
        }
        Ok(url)
    }

    pub fn random_cats(&self, limit: Option<u32>, page: Option<u32>) -> Result<Url, ApiError> {
        self.build(
            "/images/search",
            &[
                ("limit", Some(limit.unwrap_or(DEFAULT_RANDOM_LIMIT).to_string())),
                ("page", Some(page.unwrap_or(DEFAULT_RANDOM_PAGE).to_string())),
                ("has_breeds", Some(1.to_string())),
            ],
        )
    }

    pub fn breeds(&self) -> Result<Url, ApiError> {
        self.build("/breeds", &[])
    }

    pub fn breed_images(&self, breed_id: &str, limit: Option<u32>) -> Result<Url, ApiError> {
        self.build(
            "/images/search",
            &[
                ("breed_ids", Some(breed_id.to_string())),
                ("limit", Some(limit.unwrap_or(DEFAULT_BREED_IMAGES_LIMIT).to_string())),
            ],
        )
    }

    pub fn cat_by_id(&self, id: &str) -> Result<Url, ApiError> {
        self.build(&format!("/images/{id}"), &[])
    }
}

/// The URL with the credential value masked, for logs.
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == API_KEY_PARAM { "***".into() } else { value };
            (key.into_owned(), value.into_owned())
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
