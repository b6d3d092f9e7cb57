use crate::Image;

/// In-memory favorites collection. At most one entry per image id; insertion order is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites {
    entries: Vec<Image>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the entry with `image.id` if present, otherwise appends `image`.
    /// Returns `true` when the image is a favorite afterwards.
    pub fn toggle(&mut self, image: Image) -> bool {
        match self.position(&image.id) {
            Some(index) => {
                self.entries.remove(index);
                false
            }
            None => {
                self.entries.push(image);
                true
            }
        }
    }

    /// Removes the entry with `id`. Absent ids are a no-op; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn as_slice(&self) -> &[Image] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|image| image.id == id)
    }
}
