use catalog_core::{AppViewModel, Route};

/// Plain-text rendering of the mounted page, one line per fact.
pub fn summarize(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!(
        "location: {}",
        view.location.as_deref().unwrap_or("(none)")
    )];

    match view.route {
        Route::Random => {
            if let Some(random) = &view.random {
                lines.push(format!(
                    "random cats: {} loaded, page {}",
                    random.items.len(),
                    random.page
                ));
                if random.no_cats && random.error.is_none() {
                    lines.push("No cats found.".to_string());
                }
            }
        }
        Route::Breeds => {
            if let Some(breeds) = &view.breeds {
                lines.push(format!("breeds: {} shown", breeds.items.len()));
                if !breeds.search_text.is_empty() {
                    lines.push(format!("search: {:?}", breeds.search_text));
                }
                if breeds.no_matches && breeds.error.is_none() {
                    lines.push("No breeds match your search.".to_string());
                }
                if let Some(gallery) = &breeds.gallery {
                    lines.push(format!(
                        "gallery: {} ({}) with {} image(s)",
                        gallery.name,
                        gallery.origin,
                        gallery.images.len()
                    ));
                }
            }
        }
        Route::Favorites => {
            if view.favorites_empty {
                lines.push("No favorite cats yet.".to_string());
            } else {
                lines.push(format!("favorites: {}", view.favorites.len()));
            }
        }
        Route::NotFound => lines.push("404: page not found".to_string()),
    }

    if let Some(banner) = view.error_banner() {
        lines.push(banner.to_string());
    }

    if let Some(detail) = &view.detail {
        let breed = detail
            .breed
            .as_ref()
            .map(|breed| breed.name.as_str())
            .unwrap_or("Unknown breed");
        lines.push(format!("detail: {} ({}) {}", detail.image.id, breed, detail.image.url));
        if !detail.temperament.is_empty() {
            lines.push(format!("temperament: {}", detail.temperament.join(" | ")));
        }
    }

    lines
}
