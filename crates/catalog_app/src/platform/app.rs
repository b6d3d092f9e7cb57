use std::time::{Duration, Instant};

use catalog_core::{update, AppState, AppViewModel, Msg, Page};
use catalog_engine::EngineHandle;
use catalog_logging::{catalog_debug, catalog_warn};

use super::effects::{event_to_msg, EffectRunner};

/// How long to block on the engine before sending a clock tick.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

/// Drives `update` without a window: messages in, effects out, engine events back in.
pub struct HeadlessSession {
    state: AppState,
    effects: EffectRunner,
}

impl HeadlessSession {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(engine),
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            catalog_debug!("State changed, route={:?}", state.route());
        }
        self.state = state;
        self.effects.run(effects);
    }

    /// Feeds engine results and ticks into `update` until no fetch is in flight
    /// and no search is waiting to settle. Returns false when `timeout` runs out first.
    pub fn run_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if self.is_idle() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                catalog_warn!(
                    "Gave up waiting with {} request(s) in flight",
                    self.effects.in_flight()
                );
                return false;
            }

            let wait = TICK_INTERVAL.min(deadline - now);
            match self.effects.next_event(wait) {
                Some(event) => match event_to_msg(event) {
                    Ok(msg) => self.dispatch(msg),
                    Err(err) => catalog_warn!("Dropping engine event: {:#}", err),
                },
                None => self.dispatch(Msg::Tick {
                    now: Instant::now(),
                }),
            }
        }
    }

    fn is_idle(&self) -> bool {
        let search_pending = match self.state.page() {
            Page::Breeds(page) => page.search().is_pending(),
            _ => false,
        };
        self.effects.in_flight() == 0 && !search_pending
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn history(&self) -> &[String] {
        self.effects.history()
    }

    pub fn notices(&self) -> &[String] {
        self.effects.notices()
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.effects.clipboard()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use catalog_core::{Breed, Image, ToggleOrigin, NOTICE_ADDED, NOTICE_LINK_COPIED};
    use catalog_engine::{ApiError, CatSource};

    const WAIT: Duration = Duration::from_secs(5);

    #[derive(Default)]
    struct FakeSource {
        calls: Mutex<Vec<String>>,
        fail_breeds: bool,
    }

    impl FakeSource {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn image(id: &str) -> Image {
        Image {
            id: id.to_string(),
            url: format!("https://cdn.example.com/{id}.jpg"),
            width: 1,
            height: 1,
            breeds: None,
        }
    }

    fn breed(id: &str, name: &str) -> Breed {
        Breed {
            id: id.to_string(),
            name: name.to_string(),
            origin: "Egypt".to_string(),
            temperament: "Active, Curious".to_string(),
            ..Breed::default()
        }
    }

    #[async_trait::async_trait]
    impl CatSource for FakeSource {
        async fn random_cats(&self, limit: Option<u32>, page: Option<u32>) -> Result<Vec<Image>, ApiError> {
            self.record(format!("random {limit:?} {page:?}"));
            let page = page.unwrap_or_default();
            Ok((0..limit.unwrap_or(10))
                .map(|n| image(&format!("p{page}-{n}")))
                .collect())
        }

        async fn breeds(&self) -> Result<Vec<Breed>, ApiError> {
            self.record("breeds".to_string());
            if self.fail_breeds {
                return Err(ApiError::Http {
                    status: 500,
                    status_text: "Internal Server Error".to_string(),
                });
            }
            Ok(vec![breed("abys", "Abyssinian"), breed("beng", "Bengal")])
        }

        async fn breed_images(&self, breed_id: &str, limit: Option<u32>) -> Result<Vec<Image>, ApiError> {
            self.record(format!("breed {breed_id} {limit:?}"));
            Ok(vec![image(&format!("{breed_id}-1"))])
        }

        async fn cat_by_id(&self, id: &str) -> Result<Image, ApiError> {
            self.record(format!("cat {id}"));
            if id == "missing" {
                return Err(ApiError::Http {
                    status: 404,
                    status_text: "Not Found".to_string(),
                });
            }
            let mut cat = image(id);
            cat.breeds = Some(vec![breed("abys", "Abyssinian")]);
            Ok(cat)
        }
    }

    fn session(source: Arc<FakeSource>) -> HeadlessSession {
        catalog_logging::initialize_for_tests();
        HeadlessSession::new(EngineHandle::with_source(source).unwrap())
    }

    #[test]
    fn random_page_loads_and_appends_more() {
        let source = Arc::new(FakeSource::default());
        let mut session = session(source.clone());

        session.dispatch(Msg::Mounted {
            href: "http://localhost/".to_string(),
        });
        assert!(session.run_until_idle(WAIT));
        session.dispatch(Msg::LoadMoreClicked);
        assert!(session.run_until_idle(WAIT));

        let random = session.view().random.unwrap();
        assert_eq!(random.items.len(), 20);
        assert_eq!(random.items[10].id, "p1-0");
        assert_eq!(random.page, 1);
        assert!(!random.is_loading);
        assert_eq!(
            *source.calls.lock().unwrap(),
            vec!["random Some(10) Some(0)", "random Some(10) Some(1)"]
        );
    }

    #[test]
    fn breed_deep_link_opens_gallery() {
        let source = Arc::new(FakeSource::default());
        let mut session = session(source);

        session.dispatch(Msg::Mounted {
            href: "http://localhost/breeds?breed=abys".to_string(),
        });
        assert!(session.run_until_idle(WAIT));

        let gallery = session.view().breeds.unwrap().gallery.unwrap();
        assert_eq!(gallery.breed_id, "abys");
        assert_eq!(gallery.name, "Abyssinian");
        assert_eq!(gallery.images, vec![image("abys-1")]);
    }

    #[test]
    fn cat_detail_share_and_favorite() {
        let source = Arc::new(FakeSource::default());
        let mut session = session(source);

        session.dispatch(Msg::Mounted {
            href: "http://localhost/".to_string(),
        });
        assert!(session.run_until_idle(WAIT));
        session.dispatch(Msg::CatClicked {
            cat_id: "p0-3".to_string(),
        });
        assert!(session.run_until_idle(WAIT));

        let detail = session.view().detail.unwrap();
        assert_eq!(detail.image.id, "p0-3");
        assert_eq!(detail.temperament, vec!["Active", "Curious"]);
        assert_eq!(session.history().last().map(String::as_str), Some("/?cat=p0-3"));

        session.dispatch(Msg::ShareClicked);
        assert_eq!(session.clipboard(), Some("http://localhost/?cat=p0-3"));

        session.dispatch(Msg::FavoriteToggled {
            image: detail.image,
            origin: ToggleOrigin::Detail,
        });
        assert_eq!(session.notices(), [NOTICE_LINK_COPIED, NOTICE_ADDED]);
        assert!(session.view().detail.unwrap().is_favorite);
    }

    #[test]
    fn failed_cat_lookup_leaves_view_unchanged() {
        let source = Arc::new(FakeSource::default());
        let mut session = session(source);

        session.dispatch(Msg::Mounted {
            href: "http://localhost/favorites?cat=missing".to_string(),
        });
        assert!(session.run_until_idle(WAIT));

        assert!(session.view().detail.is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn breed_failure_shows_banner_then_retry_refetches() {
        let source = Arc::new(FakeSource {
            fail_breeds: true,
            ..FakeSource::default()
        });
        let mut session = session(source.clone());

        session.dispatch(Msg::Mounted {
            href: "http://localhost/breeds".to_string(),
        });
        assert!(session.run_until_idle(WAIT));
        assert_eq!(
            session.view().error_banner(),
            Some(catalog_core::BREEDS_ERROR_MESSAGE)
        );

        session.dispatch(Msg::RetryClicked);
        assert!(session.run_until_idle(WAIT));
        assert_eq!(*source.calls.lock().unwrap(), vec!["breeds", "breeds"]);
    }

    #[test]
    fn search_settles_before_idle() {
        let source = Arc::new(FakeSource::default());
        let mut session = session(source);

        session.dispatch(Msg::Mounted {
            href: "http://localhost/breeds".to_string(),
        });
        assert!(session.run_until_idle(WAIT));
        session.dispatch(Msg::SearchChanged {
            text: "beng".to_string(),
            at: Instant::now(),
        });
        assert!(session.run_until_idle(WAIT));

        let breeds = session.view().breeds.unwrap();
        assert_eq!(breeds.items.len(), 1);
        assert_eq!(breeds.items[0].id, "beng");
    }
}
