use crate::error::{Result, SignError};
use base64::{
    alphabet,
    engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, URL_SAFE_NO_PAD},
    engine::DecodePaddingMode,
    Engine,
};

/// Standard alphabet decoder that tolerates non-zero trailing bits, as the
/// secrets handed out by the Maps console are not always canonical.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Decode a base64url signing secret into raw key bytes
///
/// Whitespace anywhere in the secret and any run of trailing `=` are
/// ignored. `-` and `_` are mapped back to `+` and `/`, and the result is
/// re-padded with `=` up to a multiple of four before decoding.
pub fn decode_key(secret: &str) -> Result<Vec<u8>> {
    let compact: String = secret.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let unpadded = compact.trim_end_matches('=');
    if unpadded.is_empty() {
        return Err(SignError::InvalidKey("secret is empty".into()));
    }

    // Map onto the standard alphabet rather than decoding with URL_SAFE, so
    // secrets pasted with `+` and `/` are accepted too.
    let mut standard: String = unpadded
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    let pad = (4 - standard.len() % 4) % 4;
    standard.extend(std::iter::repeat('=').take(pad));

    let key = LENIENT_STANDARD
        .decode(&standard)
        .map_err(|e| SignError::InvalidKey(e.to_string()))?;

    if key.is_empty() {
        return Err(SignError::InvalidKey("secret decodes to an empty key".into()));
    }

    Ok(key)
}

/// Encode raw signature bytes as url-safe base64 without padding
pub fn encode_signature(raw: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(raw)
}
