pub mod crypto;
pub mod encoding;
