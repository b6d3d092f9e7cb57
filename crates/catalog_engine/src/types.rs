use catalog_core::{Breed, Image};
use thiserror::Error;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status.
    #[error("API Error: {status} {status_text}")]
    Http { status: u16, status_text: String },
    /// No response at all: connection refused, DNS failure, timeout.
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ApiError),
}

/// A request the engine executes on behalf of the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    RandomCats { limit: u32, page: u32 },
    Breeds,
    BreedImages { breed_id: String, limit: u32 },
    CatById { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPayload {
    Images(Vec<Image>),
    Breeds(Vec<Breed>),
    Image(Image),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Completed {
        request: FetchRequest,
        result: Result<FetchPayload, ApiError>,
    },
}
