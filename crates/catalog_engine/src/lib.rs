//! Catalog engine: HTTP access to the cat service and effect execution.
mod engine;
mod fetch;
mod types;
mod urls;

pub use engine::EngineHandle;
pub use fetch::{ApiSettings, CatSource, ReqwestCatSource};
pub use types::{ApiError, EngineError, EngineEvent, FetchPayload, FetchRequest};
pub use urls::{
    redacted, CatApiUrls, API_KEY_PARAM, DEFAULT_BASE_URL, DEFAULT_BREED_IMAGES_LIMIT,
    DEFAULT_RANDOM_LIMIT, DEFAULT_RANDOM_PAGE,
};
