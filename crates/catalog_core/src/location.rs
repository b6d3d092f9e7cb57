//! Address handling: routes, deep-link parameters and shareable links.
//!
//! Deep links are read once when a page mounts. Later changes to the address are
//! produced by the app itself (opening or closing a detail) and are never read back.
use url::Url;

/// Origin used when a location is given as a bare path.
pub const DEFAULT_ORIGIN: &str = "http://localhost";

pub const CAT_PARAM: &str = "cat";
pub const BREED_PARAM: &str = "breed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Random,
    Breeds,
    Favorites,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "" => Route::Random,
            "/breeds" => Route::Breeds,
            "/favorites" => Route::Favorites,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Random | Route::NotFound => "/",
            Route::Breeds => "/breeds",
            Route::Favorites => "/favorites",
        }
    }

    fn accepts_breed_link(self) -> bool {
        self == Route::Breeds
    }

    fn accepts_cat_link(self) -> bool {
        self != Route::NotFound
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    /// Accepts an absolute URL or a path with optional query (`/breeds?breed=abys`).
    pub fn parse(raw: &str) -> Result<Self, url::ParseError> {
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(DEFAULT_ORIGIN)?.join(raw)?,
            Err(err) => return Err(err),
        };
        Ok(Self { url })
    }

    /// Resolves `target` (usually a path) against this location's origin.
    pub fn navigate(&self, target: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: self.url.join(target)?,
        })
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn route(&self) -> Route {
        Route::from_path(self.path())
    }

    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// First non-empty value of the named query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, value)| key == name && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    }

    /// Same path with the query replaced by `?cat=<id>`.
    pub fn with_cat(&self, cat_id: &str) -> Self {
        let mut url = self.url.clone();
        url.set_fragment(None);
        url.query_pairs_mut().clear().append_pair(CAT_PARAM, cat_id);
        Self { url }
    }

    /// Same path with no query at all.
    pub fn without_query(&self) -> Self {
        let mut url = self.url.clone();
        url.set_query(None);
        url.set_fragment(None);
        Self { url }
    }

    /// Path plus query, as pushed into browser history.
    pub fn relative(&self) -> String {
        match self.url.query() {
            Some(query) => format!("{}?{}", self.url.path(), query),
            None => self.url.path().to_string(),
        }
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }
}

/// Selection requested by the address at mount time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeepLink {
    pub cat: Option<String>,
    pub breed: Option<String>,
}

impl DeepLink {
    /// Reads the parameters the route supports; `breed` is only honoured on `/breeds`.
    pub fn read(location: &Location) -> Self {
        let route = location.route();
        Self {
            cat: route
                .accepts_cat_link()
                .then(|| location.query_param(CAT_PARAM))
                .flatten(),
            breed: route
                .accepts_breed_link()
                .then(|| location.query_param(BREED_PARAM))
                .flatten(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cat.is_none() && self.breed.is_none()
    }
}

/// `<origin><path>?cat=<id>` for the clipboard.
pub fn share_url(location: &Location, cat_id: &str) -> String {
    location.with_cat(cat_id).href().to_string()
}

/// Address of a breed gallery on the breeds page.
pub fn breed_link(breed_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(BREED_PARAM, breed_id)
        .finish();
    format!("{}?{}", Route::Breeds.path(), query)
}
