// crates/domain/src/cipher.rs

/// Byte-cycling XOR transform.
///
/// Applying [`XorCipher::apply`] twice with the same key reproduces the input;
/// there is no separate unlock algorithm. The transform operates on raw bytes
/// (the UTF-8 encoding when the input came from text), consistently in both
/// directions, so round trips are lossless for any input. The flip side is
/// that a single application's output is arbitrary bytes and need not be valid
/// UTF-8; callers that want printable output must armor it themselves.
///
/// Obfuscation only, not a security primitive.
#[derive(Debug, Clone)]
pub struct XorCipher {
    key: Vec<u8>,
}

impl XorCipher {
    pub fn new(key: &str) -> Self {
        Self { key: key.as_bytes().to_vec() }
    }

    /// XOR each input byte with the key byte at `i % key.len()`.
    ///
    /// An empty key returns the input unchanged. Output length always equals
    /// input length.
    #[must_use]
    pub fn apply(&self, data: &[u8]) -> Vec<u8> {
        if self.key.is_empty() {
            return data.to_vec();
        }
        data.iter()
            .enumerate()
            .map(|(i, &byte)| byte ^ self.key[i % self.key.len()])
            .collect()
    }
}
