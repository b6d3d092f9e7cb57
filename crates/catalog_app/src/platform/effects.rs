use std::time::Duration;

use anyhow::bail;
use catalog_core::{Effect, Msg};
use catalog_engine::{EngineEvent, EngineHandle, FetchPayload, FetchRequest};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

/// Executes `Effect`s: fetches go to the engine, the rest stand in for the browser.
pub struct EffectRunner {
    engine: EngineHandle,
    in_flight: usize,
    history: Vec<String>,
    notices: Vec<String>,
    clipboard: Option<String>,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            in_flight: 0,
            history: Vec::new(),
            notices: Vec::new(),
            clipboard: None,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchRandomCats { page, limit } => {
                    self.fetch(FetchRequest::RandomCats { limit, page });
                }
                Effect::FetchBreeds => self.fetch(FetchRequest::Breeds),
                Effect::FetchBreedImages { breed_id, limit } => {
                    self.fetch(FetchRequest::BreedImages { breed_id, limit });
                }
                Effect::FetchCat { cat_id } => self.fetch(FetchRequest::CatById { id: cat_id }),
                Effect::PushLocation(path) => {
                    catalog_info!("Location {}", path);
                    self.history.push(path);
                }
                Effect::CopyToClipboard(text) => {
                    catalog_info!("Clipboard {}", text);
                    self.clipboard = Some(text);
                }
                Effect::Notify(text) => {
                    catalog_info!("Notice: {}", text);
                    self.notices.push(text);
                }
            }
        }
    }

    fn fetch(&mut self, request: FetchRequest) {
        catalog_debug!("Enqueue {:?} in_flight={}", request, self.in_flight + 1);
        self.in_flight += 1;
        self.engine.enqueue(request);
    }

    /// Waits up to `timeout` for the next completed fetch.
    pub fn next_event(&mut self, timeout: Duration) -> Option<EngineEvent> {
        let event = self.engine.recv_timeout(timeout)?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Every path pushed so far, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}

/// Turns a finished fetch into the message `update` expects.
pub fn event_to_msg(event: EngineEvent) -> anyhow::Result<Msg> {
    let EngineEvent::Completed { request, result } = event;
    if let Err(err) = &result {
        catalog_warn!("{:?} failed: {}", request, err);
    }
    let result = result.map_err(|err| err.to_string());

    let msg = match (request, result) {
        (FetchRequest::RandomCats { page, .. }, Ok(FetchPayload::Images(images))) => {
            Msg::RandomCatsLoaded {
                page,
                result: Ok(images),
            }
        }
        (FetchRequest::RandomCats { page, .. }, Err(err)) => Msg::RandomCatsLoaded {
            page,
            result: Err(err),
        },
        (FetchRequest::Breeds, Ok(FetchPayload::Breeds(breeds))) => Msg::BreedsLoaded {
            result: Ok(breeds),
        },
        (FetchRequest::Breeds, Err(err)) => Msg::BreedsLoaded { result: Err(err) },
        (FetchRequest::BreedImages { breed_id, .. }, Ok(FetchPayload::Images(images))) => {
            Msg::BreedImagesLoaded {
                breed_id,
                result: Ok(images),
            }
        }
        (FetchRequest::BreedImages { breed_id, .. }, Err(err)) => Msg::BreedImagesLoaded {
            breed_id,
            result: Err(err),
        },
        (FetchRequest::CatById { id }, Ok(FetchPayload::Image(image))) => Msg::CatLoaded {
            cat_id: id,
            result: Ok(image),
        },
        (FetchRequest::CatById { id }, Err(err)) => Msg::CatLoaded {
            cat_id: id,
            result: Err(err),
        },
        (request, Ok(payload)) => {
            bail!("{:?} answered with {} payload", request, payload_kind(&payload))
        }
    };
    Ok(msg)
}

fn payload_kind(payload: &FetchPayload) -> &'static str {
    match payload {
        FetchPayload::Images(_) => "images",
        FetchPayload::Breeds(_) => "breeds",
        FetchPayload::Image(_) => "image",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Image;
    use catalog_engine::ApiError;

    fn image(id: &str) -> Image {
        Image {
            id: id.to_string(),
            url: format!("https://cdn.example.com/{id}.jpg"),
            width: 1,
            height: 1,
            breeds: None,
        }
    }

    #[test]
    fn random_page_keeps_its_page_number() {
        let msg = event_to_msg(EngineEvent::Completed {
            request: FetchRequest::RandomCats { limit: 10, page: 3 },
            result: Ok(FetchPayload::Images(vec![image("a")])),
        })
        .unwrap();
        assert_eq!(
            msg,
            Msg::RandomCatsLoaded {
                page: 3,
                result: Ok(vec![image("a")]),
            }
        );
    }

    #[test]
    fn http_failure_becomes_display_text() {
        let msg = event_to_msg(EngineEvent::Completed {
            request: FetchRequest::BreedImages {
                breed_id: "abys".to_string(),
                limit: 12,
            },
            result: Err(ApiError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
            }),
        })
        .unwrap();
        assert_eq!(
            msg,
            Msg::BreedImagesLoaded {
                breed_id: "abys".to_string(),
                result: Err("API Error: 404 Not Found".to_string()),
            }
        );
    }

    #[test]
    fn single_cat_maps_to_cat_loaded() {
        let msg = event_to_msg(EngineEvent::Completed {
            request: FetchRequest::CatById {
                id: "xyz".to_string(),
            },
            result: Ok(FetchPayload::Image(image("xyz"))),
        })
        .unwrap();
        assert_eq!(
            msg,
            Msg::CatLoaded {
                cat_id: "xyz".to_string(),
                result: Ok(image("xyz")),
            }
        );
    }

    #[test]
    fn mismatched_payload_is_rejected() {
        let err = event_to_msg(EngineEvent::Completed {
            request: FetchRequest::Breeds,
            result: Ok(FetchPayload::Images(Vec::new())),
        })
        .unwrap_err();
        assert!(err.to_string().contains("images payload"));
    }
}
