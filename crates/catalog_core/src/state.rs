use catalog_logging::{catalog_debug, catalog_warn};

use crate::effect::{NOTICE_ADDED, NOTICE_LINK_COPIED, NOTICE_REMOVED};
use crate::location::{breed_link, share_url, DeepLink, Location, Route};
use crate::pages::{BreedsPage, Page, RandomCatsPage, BREED_IMAGES_LIMIT, RANDOM_CATS_PAGE_SIZE};
use crate::view_model::AppViewModel;
use crate::{Breed, Effect, Favorites, Image, QueryCache, QueryState, ToggleOrigin};

/// Whole client state: mounted page, detail view, favorites and the query cache.
///
/// Favorites and queries outlive page remounts; page-local state does not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    location: Option<Location>,
    page: Page,
    detail: Option<Image>,
    favorites: Favorites,
    random_cats: QueryCache<u32, Vec<Image>>,
    breeds: QueryState<Vec<Breed>>,
    breed_images: QueryCache<String, Vec<Image>>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn route(&self) -> Route {
        match &self.page {
            Page::Random(_) => Route::Random,
            Page::Breeds(_) => Route::Breeds,
            Page::Favorites => Route::Favorites,
            Page::NotFound => Route::NotFound,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn detail(&self) -> Option<&Image> {
        self.detail.as_ref()
    }

    pub fn random_cats(&self) -> &QueryCache<u32, Vec<Image>> {
        &self.random_cats
    }

    pub fn breeds(&self) -> &QueryState<Vec<Breed>> {
        &self.breeds
    }

    pub fn breed_images(&self) -> &QueryCache<String, Vec<Image>> {
        &self.breed_images
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Mounts the page for `location` and reads its deep link once.
    pub(crate) fn mount(&mut self, location: Location) -> Vec<Effect> {
        let deep_link = DeepLink::read(&location);
        let mut effects = Vec::new();
        self.detail = None;

        match location.route() {
            Route::Random => {
                let mut page = RandomCatsPage::default();
                if let Some(cached) = self.random_cats.data(&0) {
                    page.apply_page(0, cached);
                }
                self.page = Page::Random(page);
                effects.extend(self.request_random_page(0));
            }
            Route::Breeds => {
                self.page = Page::Breeds(BreedsPage::default());
                effects.extend(self.request_breeds());
                if let Some(breed_id) = deep_link.breed.as_deref() {
                    effects.extend(self.select_breed(breed_id, false));
                }
            }
            Route::Favorites => self.page = Page::Favorites,
            Route::NotFound => self.page = Page::NotFound,
        }

        if deep_link.is_empty() {
            catalog_debug!("Mounted {} without deep link", location.relative());
        }
        if let Some(cat_id) = deep_link.cat {
            catalog_debug!("Deep link requests cat {}", cat_id);
            effects.push(Effect::FetchCat { cat_id });
        }

        self.location = Some(location);
        self.mark_dirty();
        effects
    }

    /// Follows an in-app link: pushes it into history and remounts.
    pub(crate) fn navigate(&mut self, target: &str) -> Vec<Effect> {
        let next = match &self.location {
            Some(current) => current.navigate(target),
            None => Location::parse(target),
        };
        let location = match next {
            Ok(location) => location,
            Err(err) => {
                catalog_warn!("Ignoring navigation to {:?}: {}", target, err);
                return Vec::new();
            }
        };
        let mut effects = vec![Effect::PushLocation(location.relative())];
        effects.extend(self.mount(location));
        effects
    }

    /// Re-issues the failed queries of the mounted page, keeping its local state.
    pub(crate) fn retry(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        match &self.page {
            Page::Random(page) => {
                let current = page.page();
                if self.random_cats.get(&current).is_some_and(|query| query.error().is_some()) {
                    effects.extend(self.request_random_page(current));
                }
            }
            Page::Breeds(page) => {
                let failed_gallery = page
                    .selected_breed_id()
                    .filter(|id| {
                        self.breed_images
                            .get(&id.to_string())
                            .is_some_and(|query| query.error().is_some())
                    })
                    .map(ToOwned::to_owned);
                if self.breeds.error().is_some() {
                    effects.extend(self.request_breeds());
                }
                if let Some(breed_id) = failed_gallery {
                    effects.extend(self.request_breed_images(&breed_id));
                }
            }
            Page::Favorites | Page::NotFound => {}
        }
        if !effects.is_empty() {
            catalog_debug!("Retrying {} request(s)", effects.len());
            self.mark_dirty();
        }
        effects
    }

    fn request_random_page(&mut self, page: u32) -> Option<Effect> {
        self.random_cats.begin(page).then_some(Effect::FetchRandomCats {
            page,
            limit: RANDOM_CATS_PAGE_SIZE,
        })
    }

    fn request_breeds(&mut self) -> Option<Effect> {
        self.breeds.begin().then_some(Effect::FetchBreeds)
    }

    fn request_breed_images(&mut self, breed_id: &str) -> Option<Effect> {
        self.breed_images
            .begin(breed_id.to_string())
            .then(|| Effect::FetchBreedImages {
                breed_id: breed_id.to_string(),
                limit: BREED_IMAGES_LIMIT,
            })
    }

    /// Requests the next random page; ignored while the current page is in flight.
    pub(crate) fn load_more(&mut self) -> Vec<Effect> {
        let Page::Random(page) = &mut self.page else {
            return Vec::new();
        };
        if self
            .random_cats
            .get(&page.page())
            .is_some_and(QueryState::is_fetching)
        {
            return Vec::new();
        }
        let next = page.next_page();
        self.mark_dirty();
        self.request_random_page(next).into_iter().collect()
    }

    /// Selects a breed and enables its gallery query.
    pub(crate) fn select_breed(&mut self, breed_id: &str, open_now: bool) -> Vec<Effect> {
        let Page::Breeds(page) = &mut self.page else {
            return Vec::new();
        };
        page.select(breed_id, self.breeds.data().map(Vec::as_slice));
        page.gallery_open = open_now || self.breed_images.data(&breed_id.to_string()).is_some();
        self.mark_dirty();
        self.request_breed_images(breed_id).into_iter().collect()
    }

    pub(crate) fn close_gallery(&mut self) {
        if let Page::Breeds(page) = &mut self.page {
            if page.gallery_open {
                page.gallery_open = false;
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn search_changed(&mut self, text: String, at: std::time::Instant) {
        if let Page::Breeds(page) = &mut self.page {
            page.search.input(text, at);
            self.mark_dirty();
        }
    }

    pub(crate) fn tick(&mut self, now: std::time::Instant) {
        if let Page::Breeds(page) = &mut self.page {
            if page.search.poll(now) {
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn apply_random_cats(&mut self, page: u32, result: Result<Vec<Image>, String>) {
        match result {
            Ok(images) => {
                if let Page::Random(random) = &mut self.page {
                    random.apply_page(page, &images);
                }
                self.random_cats.resolve(page, images);
            }
            Err(reason) => {
                catalog_warn!("Random cats page {} failed: {}", page, reason);
                self.random_cats.fail(page, reason);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn apply_breeds(&mut self, result: Result<Vec<Breed>, String>) {
        match result {
            Ok(breeds) => {
                if let Page::Breeds(page) = &mut self.page {
                    page.refresh_selection(&breeds);
                }
                self.breeds.resolve(breeds);
            }
            Err(reason) => {
                catalog_warn!("Breed list failed: {}", reason);
                self.breeds.fail(reason);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn apply_breed_images(&mut self, breed_id: String, result: Result<Vec<Image>, String>) {
        match result {
            Ok(images) => {
                if let Page::Breeds(page) = &mut self.page {
                    if page.selected_breed_id() == Some(breed_id.as_str()) {
                        if let Some(breeds) = self.breeds.data() {
                            page.refresh_selection(breeds);
                        }
                        page.gallery_open = true;
                    }
                }
                self.breed_images.resolve(breed_id, images);
            }
            Err(reason) => {
                catalog_warn!("Images for breed {} failed: {}", breed_id, reason);
                self.breed_images.fail(breed_id, reason);
            }
        }
        self.mark_dirty();
    }

    /// Opens the detail view for a fetched cat, or drops a failed fetch with a log line.
    pub(crate) fn apply_cat(&mut self, cat_id: String, result: Result<Image, String>) -> Vec<Effect> {
        let image = match result {
            Ok(image) => image,
            Err(reason) => {
                catalog_warn!("Failed to fetch cat details for {}: {}", cat_id, reason);
                return Vec::new();
            }
        };

        if let Page::Breeds(page) = &mut self.page {
            page.gallery_open = false;
        }
        self.detail = Some(image);
        self.mark_dirty();

        match self.location.as_ref().map(|location| location.with_cat(&cat_id)) {
            Some(location) => {
                let effect = Effect::PushLocation(location.relative());
                self.location = Some(location);
                vec![effect]
            }
            None => Vec::new(),
        }
    }

    pub(crate) fn close_detail(&mut self) -> Vec<Effect> {
        self.detail = None;
        self.mark_dirty();
        match self.location.as_ref().map(Location::without_query) {
            Some(location) => {
                let effect = Effect::PushLocation(location.relative());
                self.location = Some(location);
                vec![effect]
            }
            None => Vec::new(),
        }
    }

    pub(crate) fn toggle_favorite(&mut self, image: Image, origin: ToggleOrigin) -> Vec<Effect> {
        let added = self.favorites.toggle(image);
        self.mark_dirty();
        match origin {
            ToggleOrigin::Card => Vec::new(),
            ToggleOrigin::Detail => {
                let notice = if added { NOTICE_ADDED } else { NOTICE_REMOVED };
                vec![Effect::Notify(notice.to_string())]
            }
        }
    }

    pub(crate) fn remove_favorite(&mut self, cat_id: &str) -> Vec<Effect> {
        if !self.favorites.remove(cat_id) {
            return Vec::new();
        }
        self.mark_dirty();
        vec![Effect::Notify(NOTICE_REMOVED.to_string())]
    }

    pub(crate) fn share(&self) -> Vec<Effect> {
        match (&self.detail, &self.location) {
            (Some(image), Some(location)) => vec![
                Effect::CopyToClipboard(share_url(location, &image.id)),
                Effect::Notify(NOTICE_LINK_COPIED.to_string()),
            ],
            _ => Vec::new(),
        }
    }

    pub(crate) fn view_breed(&mut self, breed_id: &str) -> Vec<Effect> {
        self.navigate(&breed_link(breed_id))
    }
}
