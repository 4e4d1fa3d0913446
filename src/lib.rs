//! # urlsigner
//!
//! A Rust library for signing Google Maps API request URLs.
//!
//! The path and query of the URL are signed with HMAC-SHA1 using your URL
//! signing secret, and the signature is appended as a `signature` query
//! parameter in url-safe base64.
//!
//! ## Quick Start
//!
//! ```rust
//! let signed = urlsigner::sign(
//!     "http://maps.google.com/maps/api/geocode/json?address=New+York&sensor=false&client=clientID",
//!     "vNIXE0xscrmjlyV-12Nj_BvUPaw=",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     signed,
//!     "http://maps.google.com/maps/api/geocode/json?address=New+York&sensor=false&client=clientID&signature=KrU1TzVQM7Ur0i8i7K3huiw3MsA"
//! );
//! ```
//!
//! ## Reusing a secret
//!
//! ```rust
//! use urlsigner::UrlSigner;
//!
//! let signer = UrlSigner::new("vNIXE0xscrmjlyV-12Nj_BvUPaw=").unwrap();
//! let a = signer.sign_url("https://maps.googleapis.com/maps/api/staticmap?center=Paris").unwrap();
//! let b = signer.sign_url("https://maps.googleapis.com/maps/api/staticmap?center=Rome").unwrap();
//! assert_ne!(a, b);
//! ```
//!
//! Signed URLs follow the format: `<scheme>://<host><path>?<query>&signature=<signature>`

mod error;
mod signable;
mod utils;

#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod config;

pub use error::{Result, SignError};
pub use signable::SignableUrl;
pub use utils::crypto::generate_signature;
pub use utils::encoding::{decode_key, encode_signature};

use std::fmt;

/// A signed URL, split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    /// `scheme://host[:port]`
    pub origin: String,
    /// The signed `path?query` string
    pub resource: String,
    /// Url-safe base64 HMAC-SHA1 signature, unpadded
    pub signature: String,
}

impl SignedUrl {
    /// Render the full signed URL
    ///
    /// # Example
    ///
    /// ```rust
    /// use urlsigner::UrlSigner;
    ///
    /// let signer = UrlSigner::new("c2VjcmV0").unwrap();
    /// let url = signer.sign("https://example.com/staticmap").unwrap().to_url();
    /// assert!(url.starts_with("https://example.com/staticmap?&signature="));
    /// ```
    pub fn to_url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SignedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}&signature={}", self.origin, self.resource, self.signature)
    }
}

/// URL signer holding a decoded signing key
///
/// Decodes the secret once so that many URLs can be signed with it.
///
/// # Example
///
/// ```rust
/// use urlsigner::UrlSigner;
///
/// let signer = UrlSigner::new("vNIXE0xscrmjlyV-12Nj_BvUPaw=").unwrap();
/// let signed = signer.sign("https://maps.googleapis.com/maps/api/staticmap?zoom=1").unwrap();
/// println!("{}", signed);
/// ```
#[derive(Clone)]
pub struct UrlSigner {
    key: Vec<u8>,
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner")
            .field("key", &format_args!("<{} bytes>", self.key.len()))
            .finish()
    }
}

impl UrlSigner {
    /// Create a signer from a base64url encoded secret
    ///
    /// # Errors
    ///
    /// [`SignError::InvalidKey`] if the secret is empty or not valid base64.
    pub fn new(secret: &str) -> Result<Self> {
        Ok(Self {
            key: decode_key(secret)?,
        })
    }

    /// Create a signer from raw key bytes
    ///
    /// # Errors
    ///
    /// [`SignError::InvalidKey`] if the key is empty.
    pub fn from_bytes(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(SignError::InvalidKey("key is empty".into()));
        }
        Ok(Self { key })
    }

    /// Length of the decoded key in bytes
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Sign a URL and return its parts
    ///
    /// # Errors
    ///
    /// [`SignError::InvalidUrl`] if the URL is empty or has no scheme/host.
    pub fn sign(&self, url: &str) -> Result<SignedUrl> {
        let url = SignableUrl::parse(url)?;
        let resource = url.resource();
        let signature = generate_signature(&self.key, &resource);

        Ok(SignedUrl {
            origin: url.origin(),
            resource,
            signature,
        })
    }

    /// Convenience method to sign and render the full URL in one call
    pub fn sign_url(&self, url: &str) -> Result<String> {
        self.sign(url).map(|signed| signed.to_url())
    }
}

/// Sign a URL with a base64url encoded secret (convenience function)
///
/// This is a shorthand for creating a UrlSigner and calling sign_url. The
/// secret is checked before the URL.
///
/// # Example
///
/// ```rust
/// let url = urlsigner::sign("https://example.com/staticmap?zoom=1", "c2VjcmV0").unwrap();
/// assert!(url.contains("?zoom=1&signature="));
/// ```
pub fn sign(url: &str, secret: &str) -> Result<String> {
    UrlSigner::new(secret)?.sign_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "vNIXE0xscrmjlyV-12Nj_BvUPaw=";
    const URL: &str =
        "http://maps.google.com/maps/api/geocode/json?address=New+York&sensor=false&client=clientID";

    #[test]
    fn test_sign_reference_vector() {
        let signed = sign(URL, KEY).unwrap();
        assert_eq!(
            signed,
            format!("{}&signature=KrU1TzVQM7Ur0i8i7K3huiw3MsA", URL)
        );
    }

    #[test]
    fn test_sign_parts() {
        let signer = UrlSigner::new(KEY).unwrap();
        let signed = signer.sign(URL).unwrap();

        assert_eq!(signed.origin, "http://maps.google.com");
        assert_eq!(
            signed.resource,
            "/maps/api/geocode/json?address=New+York&sensor=false&client=clientID"
        );
        assert_eq!(signed.signature, "KrU1TzVQM7Ur0i8i7K3huiw3MsA");
        assert_eq!(signed.to_string(), signed.to_url());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(sign(URL, KEY).unwrap(), sign(URL, KEY).unwrap());
    }

    #[test]
    fn test_empty_query() {
        let signed = sign("https://maps.googleapis.com/staticmap", KEY).unwrap();
        assert_eq!(
            signed,
            "https://maps.googleapis.com/staticmap?&signature=0M1NLczenOxETWopzZgEruVImyE"
        );
    }

    #[test]
    fn test_fragment_is_dropped() {
        let with_fragment = sign(&format!("{}#top", URL), KEY).unwrap();
        assert_eq!(with_fragment, sign(URL, KEY).unwrap());
    }

    #[test]
    fn test_from_bytes_matches_new() {
        let decoded = decode_key(KEY).unwrap();
        let a = UrlSigner::from_bytes(decoded).unwrap();
        let b = UrlSigner::new(KEY).unwrap();
        assert_eq!(a.sign_url(URL).unwrap(), b.sign_url(URL).unwrap());
        assert_eq!(a.key_len(), 20);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(sign(URL, ""), Err(SignError::InvalidKey(_))));
        assert!(matches!(sign(URL, "%%%%"), Err(SignError::InvalidKey(_))));
        assert!(matches!(sign("", KEY), Err(SignError::InvalidUrl(_))));
        assert!(matches!(
            sign("maps/api/geocode/json?address=x", KEY),
            Err(SignError::InvalidUrl(_))
        ));
        assert!(matches!(
            UrlSigner::from_bytes(Vec::new()),
            Err(SignError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = UrlSigner::new(KEY).unwrap();
        let debug = format!("{:?}", signer);
        assert_eq!(debug, "UrlSigner { key: <20 bytes> }");
    }
}
