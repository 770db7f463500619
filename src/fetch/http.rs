use std::io::Read;
use std::time::Duration;

use crate::config::Settings;
use crate::error::FetchError;

use super::ImageSource;

/// Fetches photos with plain HTTP GETs
pub struct HttpImageSource {
    agent: ureq::Agent,
    max_bytes: usize,
}

impl HttpImageSource {
    /// `timeout` bounds each request as a whole, connect included
    pub fn new(timeout: Duration, max_bytes: usize) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, max_bytes }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.fetch_timeout, settings.max_image_bytes)
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(e) => return Err(FetchError::Transport(e.to_string())),
        };

        let mut bytes = Vec::new();
        response
            .into_reader()
            .take(self.max_bytes as u64 + 1)
            .read_to_end(&mut bytes)?;
        if bytes.len() > self.max_bytes {
            return Err(FetchError::TooLarge(self.max_bytes));
        }
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_transport_error() {
        let source = HttpImageSource::new(Duration::from_millis(500), 1024);
        let result = source.fetch("not a url");
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }

    #[test]
    fn test_refused_connection_is_transport_error() {
        let source = HttpImageSource::new(Duration::from_millis(500), 1024);
        let result = source.fetch("http://127.0.0.1:9/photo.jpg");
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
