//! Short id generation.
//!
//! Short ids are random UUIDs rendered in the Flickr base58 alphabet, which
//! keeps them URL-safe and free of look-alike characters (`0`, `O`, `I`, `l`).
//! Uniqueness is only probabilistic: 122 random bits make collisions
//! negligible, so nothing here checks the store.

use uuid::Uuid;

/// Length every generated short id is padded to.
pub const SHORT_ID_LENGTH: usize = 22;

/// Source of short url tokens.
#[cfg_attr(test, mockall::automock)]
pub trait ShortIdGenerator: Send + Sync {
    /// Produces a new opaque token. No determinism or uniqueness is promised.
    fn generate(&self) -> String;
}

/// Generator backed by random v4 UUIDs encoded as base58.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortUuidGenerator;

impl ShortUuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ShortIdGenerator for ShortUuidGenerator {
    fn generate(&self) -> String {
        encode_flickr_base58(Uuid::new_v4().as_bytes())
    }
}

/// Encodes bytes as Flickr base58, left-padded with the zero digit.
fn encode_flickr_base58(bytes: &[u8]) -> String {
    let encoded = bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::FLICKR)
        .into_string();

    if encoded.len() >= SHORT_ID_LENGTH {
        return encoded;
    }

    let mut padded = "1".repeat(SHORT_ID_LENGTH - encoded.len());
    padded.push_str(&encoded);
    padded
}

/// Returns a fresh random identifier for tagging error reports and responses.
///
/// Never used as a short url token.
pub fn new_tag() -> String {
    Uuid::new_v4().to_string()
}
