use std::time::Instant;

use crate::{Breed, Image};

/// Where a favorite toggle came from; only the detail view announces the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOrigin {
    Card,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App opened at this address (absolute URL or path).
    Mounted { href: String },
    /// User followed an in-app link (header tab, "view breed").
    Navigate(String),
    /// User clicked "Load more" on the random page.
    LoadMoreClicked,
    /// User clicked Retry on an error banner.
    RetryClicked,
    /// User clicked a cat card anywhere.
    CatClicked { cat_id: String },
    /// Single-cat fetch finished.
    CatLoaded {
        cat_id: String,
        result: Result<Image, String>,
    },
    /// User closed the cat detail view.
    DetailClosed,
    /// User clicked a heart.
    FavoriteToggled { image: Image, origin: ToggleOrigin },
    /// User clicked the trash icon on the favorites page.
    FavoriteRemoved { cat_id: String },
    /// User clicked Share in the cat detail view.
    ShareClicked,
    /// User asked to see the breed of the cat in the detail view.
    ViewBreedClicked { breed_id: String },
    /// User clicked a breed card.
    BreedClicked { breed_id: String },
    /// User closed the breed gallery.
    GalleryClosed,
    /// User edited the breed search box.
    SearchChanged { text: String, at: Instant },
    /// Clock tick; settles the debounced search.
    Tick { now: Instant },
    /// Random cats page request finished.
    RandomCatsLoaded {
        page: u32,
        result: Result<Vec<Image>, String>,
    },
    /// Breed list request finished.
    BreedsLoaded { result: Result<Vec<Breed>, String> },
    /// Breed gallery request finished.
    BreedImagesLoaded {
        breed_id: String,
        result: Result<Vec<Image>, String>,
    },
}
