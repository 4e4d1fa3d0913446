use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::encoding::encode_signature;

type HmacSha1 = Hmac<Sha1>;

/// Raw HMAC-SHA1 digest of a resource string
pub fn digest(key: &[u8], resource: &str) -> [u8; 20] {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC accepts any key size");
    mac.update(resource.as_bytes());
    mac.finalize().into_bytes().into()
}

/// Generate the url-safe base64 HMAC-SHA1 signature for a resource string
pub fn generate_signature(key: &[u8], resource: &str) -> String {
    encode_signature(&digest(key, resource))
}
