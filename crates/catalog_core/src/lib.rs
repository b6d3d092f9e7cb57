//! Catalog core: pure state machine and view-model helpers.
mod debounce;
mod effect;
mod favorites;
mod location;
mod model;
mod msg;
mod pages;
mod query;
mod state;
mod update;
mod view_model;

pub use debounce::{Debounced, SEARCH_DEBOUNCE};
pub use effect::{Effect, NOTICE_ADDED, NOTICE_LINK_COPIED, NOTICE_REMOVED};
pub use favorites::Favorites;
pub use location::{breed_link, share_url, DeepLink, Location, Route, DEFAULT_ORIGIN};
pub use model::{Breed, Image, Weight};
pub use msg::{Msg, ToggleOrigin};
pub use pages::{
    filter_breeds, BreedsPage, Page, RandomCatsPage, SelectedBreed, BREED_IMAGES_LIMIT,
    RANDOM_CATS_PAGE_SIZE,
};
pub use query::{QueryCache, QueryState, QueryStatus};
pub use state::AppState;
pub use update::update;
pub use view_model::{
    AppViewModel, BreedGalleryView, BreedsView, CatDetailView, ImageCardView, RandomCatsView,
    BREEDS_ERROR_MESSAGE, CATS_ERROR_MESSAGE,
};
