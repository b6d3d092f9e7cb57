/// Side effects requested by `update`; the host executes them and reports back via `Msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchRandomCats { page: u32, limit: u32 },
    FetchBreeds,
    FetchBreedImages { breed_id: String, limit: u32 },
    FetchCat { cat_id: String },
    /// Push a path (with query) into the address history.
    PushLocation(String),
    CopyToClipboard(String),
    /// Short user notice (toast).
    Notify(String),
}

pub const NOTICE_ADDED: &str = "Added to favorites";
pub const NOTICE_REMOVED: &str = "Removed from favorites";
pub const NOTICE_LINK_COPIED: &str = "Shareable link copied to clipboard!";
