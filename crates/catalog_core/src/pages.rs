use crate::{Breed, Debounced, Image};

/// Images requested per "load more" step on the random page.
pub const RANDOM_CATS_PAGE_SIZE: u32 = 10;
/// Images requested for a breed gallery.
pub const BREED_IMAGES_LIMIT: u32 = 12;

/// Local state of the random cats page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RandomCatsPage {
    page: u32,
    accumulated: Vec<Image>,
}

impl RandomCatsPage {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items(&self) -> &[Image] {
        &self.accumulated
    }

    /// Advances the page counter and returns the new page to fetch.
    pub fn next_page(&mut self) -> u32 {
        self.page += 1;
        self.page
    }

    /// Folds the result of a page request into the accumulated list.
    ///
    /// Page 0 replaces the list while the counter is still at 0; later pages
    /// append in arrival order, without deduplication. A page 0 reply after the
    /// list has grown, or a reply for a page beyond the counter (late, from before
    /// a reset), leaves the list alone.
    pub fn apply_page(&mut self, page: u32, images: &[Image]) {
        if page == 0 {
            if self.page == 0 {
                self.accumulated = images.to_vec();
            }
        } else if page <= self.page {
            self.accumulated.extend_from_slice(images);
        }
    }
}

/// Local state of the breeds page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreedsPage {
    pub(crate) search: Debounced<String>,
    pub(crate) selected: Option<SelectedBreed>,
    pub(crate) gallery_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedBreed {
    pub id: String,
    pub name: String,
    pub origin: String,
}

impl BreedsPage {
    pub fn search(&self) -> &Debounced<String> {
        &self.search
    }

    pub fn selected(&self) -> Option<&SelectedBreed> {
        self.selected.as_ref()
    }

    pub fn selected_breed_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|breed| breed.id.as_str())
    }

    pub fn gallery_open(&self) -> bool {
        self.gallery_open
    }

    /// Selects a breed id; name and origin are filled from `breeds` when known.
    pub(crate) fn select(&mut self, breed_id: &str, breeds: Option<&[Breed]>) {
        let known = breeds.and_then(|list| list.iter().find(|breed| breed.id == breed_id));
        self.selected = Some(SelectedBreed {
            id: breed_id.to_string(),
            name: known.map(|breed| breed.name.clone()).unwrap_or_default(),
            origin: known.map(|breed| breed.origin.clone()).unwrap_or_default(),
        });
    }

    /// Refreshes name/origin of the selection from a breed list that arrived later.
    pub(crate) fn refresh_selection(&mut self, breeds: &[Breed]) {
        if let Some(selected) = self.selected.as_mut() {
            if let Some(breed) = breeds.iter().find(|breed| breed.id == selected.id) {
                selected.name = breed.name.clone();
                selected.origin = breed.origin.clone();
            }
        }
    }
}

/// Case-insensitive substring match on name or origin. A blank term keeps every breed.
pub fn filter_breeds<'a>(breeds: &'a [Breed], term: &str) -> Vec<&'a Breed> {
    if term.trim().is_empty() {
        return breeds.iter().collect();
    }
    let needle = term.to_lowercase();
    breeds
        .iter()
        .filter(|breed| {
            breed.name.to_lowercase().contains(&needle)
                || breed.origin.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The mounted page and its local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Random(RandomCatsPage),
    Breeds(BreedsPage),
    Favorites,
    NotFound,
}

impl Default for Page {
    fn default() -> Self {
        Page::Random(RandomCatsPage::default())
    }
}
