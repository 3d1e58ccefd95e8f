//! ImageClient - fetches and decodes images over HTTP.

use std::time::Duration;

use image::DynamicImage;

/// Browser-like User-Agent sent with every request. Some image hosts
/// reject requests that don't identify as a browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default timeout for HTTP requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for retrieving images from URLs.
pub struct ImageClient {
    http_client: reqwest::Client,
}

impl ImageClient {
    /// Create a new ImageClient with default timeouts and the browser
    /// User-Agent.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new() -> Result<Self, FetchError> {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { http_client })
    }

    /// Fetch an image from a URL and decode it into a pixel grid.
    ///
    /// Issues a single GET request. The response body is decoded with
    /// format auto-detection; paletted formats come back expanded to
    /// RGB(A) by the decoder.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the connection fails,
    /// `FetchError::Status` if the server responds with a non-success
    /// status, or `FetchError::Decode` if the body is not a supported
    /// image encoding.
    pub async fn fetch(&self, url: &str) -> Result<DynamicImage, FetchError> {
        log::debug!("fetching image from {}", url);

        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("image fetch failed with status {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let img = image::load_from_memory(&bytes)?;
        log::debug!(
            "decoded {}x{} image ({:?})",
            img.width(),
            img.height(),
            img.color()
        );
        Ok(img)
    }
}

/// Errors that can occur while fetching and decoding an image.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status {
        /// The non-success HTTP status code.
        status: u16,
    },

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_client() {
        assert!(ImageClient::new().is_ok());
    }

    #[test]
    fn test_status_error_display() {
        let err = FetchError::Status { status: 404 };
        assert_eq!(err.to_string(), "server responded with status 404");
    }
}
