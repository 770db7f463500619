//! Photo retrieval
//!
//! Photos are fetched by URL through an `ImageSource`. `fetch_all` runs a
//! batch on a pool local to the call and returns results in input order, so
//! layout never depends on which request finished first.

pub mod decode;
pub mod http;
pub mod memory;

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::FetchError;

pub use decode::{decode_image, DecodedImage};
pub use http::HttpImageSource;
pub use memory::MemoryImageSource;

/// Anything that can turn a photo URL into bytes
pub trait ImageSource: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetch every URL with at most `concurrency` requests in flight.
/// `results[i]` belongs to `urls[i]`.
pub fn fetch_all(
    source: &dyn ImageSource,
    urls: &[String],
    concurrency: usize,
) -> Vec<Result<Vec<u8>, FetchError>> {
    if urls.is_empty() {
        return Vec::new();
    }

    let fetch_one = |url: &String| {
        let result = source.fetch(url);
        match &result {
            Ok(bytes) => debug!("Fetched {} ({} bytes)", url, bytes.len()),
            Err(e) => warn!("Failed to fetch photo {}: {}", url, e),
        }
        result
    };

    let workers = concurrency.clamp(1, urls.len());
    if workers == 1 {
        return urls.iter().map(fetch_one).collect();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| urls.par_iter().map(fetch_one).collect()),
        Err(e) => {
            warn!("Could not start fetch pool ({}); fetching sequentially", e);
            urls.iter().map(fetch_one).collect()
        }
    }
}
