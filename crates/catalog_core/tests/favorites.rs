use catalog_core::{Favorites, Image};

fn cat(id: &str) -> Image {
    Image {
        id: id.to_string(),
        url: format!("https://cdn.example.com/{id}.jpg"),
        width: 800,
        height: 600,
        breeds: None,
    }
}

fn ids(favorites: &Favorites) -> Vec<&str> {
    favorites.as_slice().iter().map(|image| image.id.as_str()).collect()
}

#[test]
fn toggle_twice_restores_membership() {
    let mut favorites = Favorites::new();
    favorites.toggle(cat("a"));
    let before = favorites.clone();

    assert!(favorites.toggle(cat("b")));
    assert!(!favorites.toggle(cat("b")));

    assert_eq!(favorites, before);
}

#[test]
fn toggle_never_stores_duplicates() {
    let mut favorites = Favorites::new();
    favorites.toggle(cat("a"));
    favorites.toggle(cat("b"));
    favorites.toggle(cat("a"));
    favorites.toggle(cat("a"));

    assert_eq!(ids(&favorites), vec!["b", "a"]);
}

#[test]
fn remove_absent_id_is_noop() {
    let mut favorites = Favorites::new();
    favorites.toggle(cat("a"));
    let before = favorites.clone();

    assert!(!favorites.remove("zzz"));
    assert_eq!(favorites, before);
}

#[test]
fn remove_present_id_drops_entry() {
    let mut favorites = Favorites::new();
    favorites.toggle(cat("a"));
    favorites.toggle(cat("b"));

    assert!(favorites.remove("a"));
    assert!(!favorites.contains("a"));
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites.get("b").map(|image| image.width), Some(800));
}
