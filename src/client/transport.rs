//! Transport selection by URL scheme.
//!
//! The port and request target computed here describe the outbound call in
//! logs; reqwest derives the same values from the URL when it connects.

use url::Url;

use crate::client::failure::ClientFailure;
use crate::errors::ErrorCode;

const DEFAULT_HTTP_PORT: u16 = 80;
const DEFAULT_HTTPS_PORT: u16 = 443;

/// The closed set of transports the client can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Https,
}

impl Transport {
    /// Select the transport for `url`, rejecting any other scheme with `BAD_URI`.
    pub fn for_url(url: &Url) -> Result<Self, ClientFailure> {
        match url.scheme() {
            "http" => Ok(Transport::Http),
            "https" => Ok(Transport::Https),
            _ => Err(ClientFailure::new(
                ErrorCode::BAD_URI,
                format!("The uri {} is not a valid uri", url),
            )),
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Transport::Http => DEFAULT_HTTP_PORT,
            Transport::Https => DEFAULT_HTTPS_PORT,
        }
    }

    /// Explicit port of `url`, falling back to this transport's default.
    pub fn port_for(self, url: &Url) -> u16 {
        url.port().unwrap_or_else(|| self.default_port())
    }
}

/// Outbound request target: path followed by the query string, if any.
pub fn request_target(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_schemes() {
        let http = Url::parse("http://example.com/posts").unwrap();
        let https = Url::parse("https://example.com/posts").unwrap();
        assert_eq!(Transport::for_url(&http).unwrap(), Transport::Http);
        assert_eq!(Transport::for_url(&https).unwrap(), Transport::Https);
    }

    #[test]
    fn test_unsupported_scheme_is_bad_uri() {
        let url = Url::parse("ftp://example.com/posts").unwrap();
        let failure = Transport::for_url(&url).unwrap_err();
        assert_eq!(failure.code(), ErrorCode::BAD_URI);
        assert!(failure.message().contains("ftp://example.com/posts"));
    }

    #[test]
    fn test_port_selection() {
        let explicit = Url::parse("http://example.com:8080/").unwrap();
        assert_eq!(Transport::Http.port_for(&explicit), 8080);

        let implicit = Url::parse("http://example.com/").unwrap();
        assert_eq!(Transport::Http.port_for(&implicit), 80);

        let secure = Url::parse("https://example.com/").unwrap();
        assert_eq!(Transport::Https.port_for(&secure), 443);

        // A default port written out explicitly is normalised away by the parser.
        let written = Url::parse("https://example.com:443/").unwrap();
        assert_eq!(Transport::Https.port_for(&written), 443);
    }

    #[test]
    fn test_request_target() {
        let url = Url::parse("http://example.com/posts?userId=1#top").unwrap();
        assert_eq!(request_target(&url), "/posts?userId=1");

        let bare = Url::parse("http://example.com").unwrap();
        assert_eq!(request_target(&bare), "/");
    }
}
