use tracing::info;

/// Default number of photos the tree can hold
pub const DEFAULT_PHOTO_CAPACITY: usize = 10;

/// Append-only, capacity-capped list of photo references
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAlbum {
    photos: Vec<String>,
    capacity: usize,
}

impl Default for PhotoAlbum {
    fn default() -> Self {
        Self::new(DEFAULT_PHOTO_CAPACITY)
    }
}

impl PhotoAlbum {
    pub fn new(capacity: usize) -> Self {
        Self {
            photos: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append as many photos as fit; the rest are dropped.
    ///
    /// Returns the number actually added.
    pub fn add_photos<I, S>(&mut self, photos: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let remaining = self.remaining();
        if remaining == 0 {
            return 0;
        }

        let before = self.photos.len();
        let mut offered = 0;
        for photo in photos {
            offered += 1;
            if self.photos.len() < self.capacity {
                self.photos.push(photo.into());
            }
        }

        let added = self.photos.len() - before;
        info!(added, dropped = offered - added, total = self.photos.len(), "photos added");
        added
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.photos.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.photos.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.photos.iter().map(String::as_str)
    }
}
