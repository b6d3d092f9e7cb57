use std::sync::Once;

use catalog_core::{
    update, AppState, Breed, Effect, Image, Msg, Route, ToggleOrigin, NOTICE_ADDED,
    NOTICE_LINK_COPIED, NOTICE_REMOVED,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn bengal_cat(id: &str) -> Image {
    Image {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{id}.jpg"),
        width: 1024,
        height: 768,
        breeds: Some(vec![Breed {
            id: "beng".to_string(),
            name: "Bengal".to_string(),
            origin: "United States".to_string(),
            temperament: "Alert, Agile, Energetic".to_string(),
            ..Breed::default()
        }]),
    }
}

fn mount(href: &str) -> (AppState, Vec<Effect>) {
    update(AppState::new(), Msg::Mounted { href: href.to_string() })
}

fn open_detail(state: AppState, id: &str) -> (AppState, Vec<Effect>) {
    let (state, effects) = update(state, Msg::CatClicked { cat_id: id.to_string() });
    assert_eq!(effects, vec![Effect::FetchCat { cat_id: id.to_string() }]);
    update(
        state,
        Msg::CatLoaded {
            cat_id: id.to_string(),
            result: Ok(bengal_cat(id)),
        },
    )
}

#[test]
fn opening_detail_sets_cat_param_and_closing_clears_it() {
    init_logging();
    let (state, _) = mount("http://localhost:5173/favorites");

    let (state, effects) = open_detail(state, "abc");
    assert_eq!(effects, vec![Effect::PushLocation("/favorites?cat=abc".to_string())]);
    assert_eq!(state.view().location.as_deref(), Some("/favorites?cat=abc"));

    let detail = state.view().detail.unwrap();
    assert_eq!(detail.breed.unwrap().name, "Bengal");
    assert_eq!(detail.temperament, vec!["Alert", "Agile", "Energetic"]);
    assert!(!detail.is_favorite);

    let (state, effects) = update(state, Msg::DetailClosed);
    assert_eq!(effects, vec![Effect::PushLocation("/favorites".to_string())]);
    assert_eq!(state.view().location.as_deref(), Some("/favorites"));
    assert!(state.view().detail.is_none());
}

#[test]
fn cat_deep_link_fetches_on_mount() {
    init_logging();
    let (state, effects) = mount("/?cat=xyz");
    assert_eq!(
        effects,
        vec![
            Effect::FetchRandomCats { page: 0, limit: 10 },
            Effect::FetchCat { cat_id: "xyz".to_string() },
        ]
    );
    assert!(state.view().detail.is_none());
}

#[test]
fn failed_deep_link_fetch_is_swallowed() {
    init_logging();
    let (state, _) = mount("/favorites?cat=gone");
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::CatLoaded {
            cat_id: "gone".to_string(),
            result: Err("API Error: 404 Not Found".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(state.view().detail.is_none());
}

#[test]
fn detail_toggle_announces_and_card_toggle_is_silent() {
    init_logging();
    let (state, _) = mount("/");
    let (state, _) = open_detail(state, "abc");

    let (state, effects) = update(
        state,
        Msg::FavoriteToggled {
            image: bengal_cat("abc"),
            origin: ToggleOrigin::Detail,
        },
    );
    assert_eq!(effects, vec![Effect::Notify(NOTICE_ADDED.to_string())]);
    assert!(state.view().detail.unwrap().is_favorite);

    let (state, effects) = update(
        state,
        Msg::FavoriteToggled {
            image: bengal_cat("abc"),
            origin: ToggleOrigin::Detail,
        },
    );
    assert_eq!(effects, vec![Effect::Notify(NOTICE_REMOVED.to_string())]);
    assert!(state.view().favorites_empty);

    let (state, effects) = update(
        state,
        Msg::FavoriteToggled {
            image: bengal_cat("def"),
            origin: ToggleOrigin::Card,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().favorites.len(), 1);
}

#[test]
fn favorites_survive_navigation_and_remove_is_idempotent() {
    init_logging();
    let (state, _) = mount("/");
    let (state, _) = update(
        state,
        Msg::FavoriteToggled {
            image: bengal_cat("keep"),
            origin: ToggleOrigin::Card,
        },
    );

    let (state, _) = update(state, Msg::Navigate("/favorites".to_string()));
    let view = state.view();
    assert_eq!(view.route, Route::Favorites);
    assert_eq!(view.favorites[0].id, "keep");

    let (state, effects) = update(state, Msg::FavoriteRemoved { cat_id: "keep".to_string() });
    assert_eq!(effects, vec![Effect::Notify(NOTICE_REMOVED.to_string())]);
    assert!(state.view().favorites_empty);

    let (state, effects) = update(state, Msg::FavoriteRemoved { cat_id: "keep".to_string() });
    assert!(effects.is_empty());
    assert!(state.favorites().is_empty());
}

#[test]
fn share_copies_absolute_link() {
    init_logging();
    let (state, _) = mount("https://cats.example.org/");
    let (state, _) = open_detail(state, "abc");

    let (_state, effects) = update(state, Msg::ShareClicked);
    assert_eq!(
        effects,
        vec![
            Effect::CopyToClipboard("https://cats.example.org/?cat=abc".to_string()),
            Effect::Notify(NOTICE_LINK_COPIED.to_string()),
        ]
    );
}

#[test]
fn view_breed_navigates_to_breed_gallery() {
    init_logging();
    let (state, _) = mount("/");
    let (state, _) = open_detail(state, "abc");

    let (state, effects) = update(state, Msg::ViewBreedClicked { breed_id: "beng".to_string() });
    assert_eq!(
        effects,
        vec![
            Effect::PushLocation("/breeds?breed=beng".to_string()),
            Effect::FetchBreeds,
            Effect::FetchBreedImages {
                breed_id: "beng".to_string(),
                limit: 12
            },
        ]
    );
    let view = state.view();
    assert_eq!(view.route, Route::Breeds);
    assert!(view.detail.is_none());
}

#[test]
fn opening_cat_from_gallery_closes_gallery() {
    init_logging();
    let (state, _) = mount("/breeds");
    let (state, _) = update(state, Msg::BreedClicked { breed_id: "beng".to_string() });
    assert!(state.view().breeds.unwrap().gallery.is_some());

    let (state, effects) = open_detail(state, "g1");
    assert_eq!(effects, vec![Effect::PushLocation("/breeds?cat=g1".to_string())]);
    let view = state.view();
    assert!(view.breeds.unwrap().gallery.is_none());
    assert!(view.detail.is_some());
}
