use crate::error::{Result, SignError};
use url::Url;

/// A URL split into the parts that take part in signing
///
/// Only `path` and `query` are signed. `scheme` and `authority` are carried
/// through to the signed URL unchanged; userinfo and fragment are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignableUrl {
    pub scheme: String,
    /// `host` or `host:port`
    pub authority: String,
    pub path: String,
    /// Raw query without the leading `?`, empty when absent
    pub query: String,
}

impl SignableUrl {
    /// Parse an absolute URL
    ///
    /// # Example
    ///
    /// ```rust
    /// use urlsigner::SignableUrl;
    ///
    /// let url = SignableUrl::parse("https://maps.googleapis.com/maps/api/staticmap?zoom=1").unwrap();
    /// assert_eq!(url.resource(), "/maps/api/staticmap?zoom=1");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(SignError::InvalidUrl("url is empty".into()));
        }

        let url = Url::parse(input).map_err(|e| SignError::InvalidUrl(e.to_string()))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| SignError::InvalidUrl("No host".into()))?;

        let authority = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            authority,
            path: url.path().to_string(),
            query: url.query().unwrap_or("").to_string(),
        })
    }

    /// The exact string that gets signed: `path?query`
    ///
    /// The `?` is always present, even when the query is empty.
    pub fn resource(&self) -> String {
        format!("{}?{}", self.path, self.query)
    }

    /// `scheme://authority`
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }
}
