use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::FetchError;

use super::ImageSource;

/// Serves photos from memory; for tests and offline rendering
#[derive(Default)]
pub struct MemoryImageSource {
    images: HashMap<String, Vec<u8>>,
    statuses: HashMap<String, u16>,
    fetches: AtomicUsize,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }

    /// Answer `url` with an HTTP error status
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.statuses.insert(url.to_string(), status);
        self
    }

    /// Number of fetches served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl ImageSource for MemoryImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.statuses.get(url) {
            return Err(FetchError::Status(*status));
        }
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Missing(url.to_string()))
    }
}
