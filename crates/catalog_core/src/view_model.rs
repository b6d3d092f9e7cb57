use crate::location::Route;
use crate::pages::{filter_breeds, Page};
use crate::{AppState, Breed, Image, QueryState};

/// Skeleton cards shown while the first page loads.
pub const FIRST_PAGE_SKELETONS: usize = 10;
/// Skeleton cards shown while a later page loads.
pub const NEXT_PAGE_SKELETONS: usize = 4;

pub const CATS_ERROR_MESSAGE: &str = "Failed to fetch cats. Please try again.";
pub const BREEDS_ERROR_MESSAGE: &str = "Failed to fetch breeds. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub route: Route,
    pub location: Option<String>,
    pub random: Option<RandomCatsView>,
    pub breeds: Option<BreedsView>,
    pub favorites: Vec<Image>,
    pub favorites_empty: bool,
    pub detail: Option<CatDetailView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomCatsView {
    pub items: Vec<Image>,
    pub page: u32,
    pub is_loading: bool,
    pub error: Option<String>,
    pub skeleton_count: usize,
    pub no_cats: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedsView {
    pub items: Vec<Breed>,
    pub search_text: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub no_matches: bool,
    pub gallery: Option<BreedGalleryView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedGalleryView {
    pub breed_id: String,
    pub name: String,
    pub origin: String,
    pub images: Vec<Image>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatDetailView {
    pub image: Image,
    pub breed: Option<Breed>,
    pub temperament: Vec<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCardView {
    pub image: Image,
    pub is_favorite: bool,
}

impl AppViewModel {
    pub(crate) fn build(state: &AppState) -> Self {
        let favorites = state.favorites();
        let random = match state.page() {
            Page::Random(page) => {
                let query = state.random_cats().get(&page.page());
                let is_loading = query.is_some_and(QueryState::is_loading);
                Some(RandomCatsView {
                    items: page.items().to_vec(),
                    page: page.page(),
                    is_loading,
                    error: query.and_then(QueryState::error).map(ToOwned::to_owned),
                    skeleton_count: match (is_loading, page.page()) {
                        (false, _) => 0,
                        (true, 0) => FIRST_PAGE_SKELETONS,
                        (true, _) => NEXT_PAGE_SKELETONS,
                    },
                    no_cats: page.items().is_empty() && !is_loading,
                })
            }
            _ => None,
        };

        let breeds = match state.page() {
            Page::Breeds(page) => {
                let all = state.breeds().data().map(Vec::as_slice).unwrap_or_default();
                let items: Vec<Breed> = filter_breeds(all, page.search().settled())
                    .into_iter()
                    .cloned()
                    .collect();
                let is_loading = state.breeds().is_loading();
                let gallery = page
                    .selected()
                    .filter(|_| page.gallery_open())
                    .map(|selected| {
                        let query = state.breed_images().get(&selected.id);
                        BreedGalleryView {
                            breed_id: selected.id.clone(),
                            name: selected.name.clone(),
                            origin: selected.origin.clone(),
                            images: query
                                .and_then(QueryState::data)
                                .cloned()
                                .unwrap_or_default(),
                            is_loading: query.is_some_and(QueryState::is_loading),
                            error: query.and_then(QueryState::error).map(ToOwned::to_owned),
                        }
                    });
                Some(BreedsView {
                    no_matches: items.is_empty() && !is_loading,
                    items,
                    search_text: page.search().raw().clone(),
                    is_loading,
                    error: state.breeds().error().map(ToOwned::to_owned),
                    gallery,
                })
            }
            _ => None,
        };

        let detail = state.detail().map(|image| {
            let breed = image.primary_breed().cloned();
            CatDetailView {
                temperament: breed
                    .as_ref()
                    .map(|breed| {
                        breed
                            .temperament_traits()
                            .into_iter()
                            .map(ToOwned::to_owned)
                            .collect()
                    })
                    .unwrap_or_default(),
                breed,
                is_favorite: favorites.contains(&image.id),
                image: image.clone(),
            }
        });

        Self {
            route: state.route(),
            location: state.location().map(|location| location.relative()),
            random,
            breeds,
            favorites: favorites.as_slice().to_vec(),
            favorites_empty: favorites.is_empty(),
            detail,
        }
    }

    /// Pairs each image with its favorite flag, for rendering heart icons on cards.
    pub fn cards(images: &[Image], favorites: &[Image]) -> Vec<ImageCardView> {
        images
            .iter()
            .map(|image| ImageCardView {
                is_favorite: favorites.iter().any(|fav| fav.id == image.id),
                image: image.clone(),
            })
            .collect()
    }

    /// User-facing banner text for the current page's failed query, if any.
    pub fn error_banner(&self) -> Option<&'static str> {
        if self.random.as_ref().is_some_and(|view| view.error.is_some()) {
            return Some(CATS_ERROR_MESSAGE);
        }
        if self.breeds.as_ref().is_some_and(|view| view.error.is_some()) {
            return Some(BREEDS_ERROR_MESSAGE);
        }
        None
    }
}
