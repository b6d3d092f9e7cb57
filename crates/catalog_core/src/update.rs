use catalog_logging::catalog_warn;

use crate::{AppState, Effect, Location, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted { href } => match Location::parse(&href) {
            Ok(location) => state.mount(location),
            Err(err) => {
                catalog_warn!("Cannot mount at {:?}: {}", href, err);
                Vec::new()
            }
        },
        Msg::Navigate(target) => state.navigate(&target),
        Msg::LoadMoreClicked => state.load_more(),
        Msg::RetryClicked => state.retry(),
        Msg::CatClicked { cat_id } => vec![Effect::FetchCat { cat_id }],
        Msg::CatLoaded { cat_id, result } => state.apply_cat(cat_id, result),
        Msg::DetailClosed => state.close_detail(),
        Msg::FavoriteToggled { image, origin } => state.toggle_favorite(image, origin),
        Msg::FavoriteRemoved { cat_id } => state.remove_favorite(&cat_id),
        Msg::ShareClicked => state.share(),
        Msg::ViewBreedClicked { breed_id } => state.view_breed(&breed_id),
        Msg::BreedClicked { breed_id } => state.select_breed(&breed_id, true),
        Msg::GalleryClosed => {
            state.close_gallery();
            Vec::new()
        }
        Msg::SearchChanged { text, at } => {
            state.search_changed(text, at);
            Vec::new()
        }
        Msg::Tick { now } => {
            state.tick(now);
            Vec::new()
        }
        Msg::RandomCatsLoaded { page, result } => {
            state.apply_random_cats(page, result);
            Vec::new()
        }
        Msg::BreedsLoaded { result } => {
            state.apply_breeds(result);
            Vec::new()
        }
        Msg::BreedImagesLoaded { breed_id, result } => {
            state.apply_breed_images(breed_id, result);
            Vec::new()
        }
    };

    (state, effects)
}
