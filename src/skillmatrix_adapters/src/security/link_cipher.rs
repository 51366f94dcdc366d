use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use secrecy::{ExposeSecret, Secret};
use skillmatrix_core::{LinkCipher, LinkCipherError, LinkClaim};

const KEY_LENGTH: usize = 32;
const NONCE_LENGTH: usize = 12;
const TAG_LENGTH: usize = 16;

/// AES-256-GCM link cipher.
///
/// Seals the JSON-encoded claim as `[nonce:12][ciphertext+tag]`, then
/// URL-safe base64 encodes the blob so the token can ride in a query
/// parameter without further escaping. Decryption authenticates the whole
/// blob: a single flipped bit fails rather than decrypting to wrong data.
#[derive(Clone)]
pub struct AesGcmLinkCipher {
    cipher: Aes256Gcm,
}

impl AesGcmLinkCipher {
    /// `encoded_key` is the URL-safe base64 (unpadded) encoding of a
    /// 32-byte key.
    pub fn new(encoded_key: &Secret<String>) -> Result<Self, LinkCipherError> {
        let key = URL_SAFE_NO_PAD
            .decode(encoded_key.expose_secret())
            .map_err(|e| {
                LinkCipherError::UnexpectedError(format!("link encryption key is not base64: {e}"))
            })?;

        if key.len() != KEY_LENGTH {
            return Err(LinkCipherError::UnexpectedError(format!(
                "link encryption key must be {KEY_LENGTH} bytes, got {}",
                key.len()
            )));
        }

        let cipher = Aes256Gcm::new_from_slice(&key)
            .map_err(|e| LinkCipherError::UnexpectedError(e.to_string()))?;

        Ok(Self { cipher })
    }
}

impl LinkCipher for AesGcmLinkCipher {
    fn seal(&self, claim: &LinkClaim) -> Result<String, LinkCipherError> {
        let plaintext = serde_json::to_vec(claim)
            .map_err(|e| LinkCipherError::UnexpectedError(e.to_string()))?;

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_ref())
            .map_err(|e| LinkCipherError::UnexpectedError(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);

        Ok(URL_SAFE_NO_PAD.encode(blob))
    }

    fn open(&self, token: &str) -> Result<LinkClaim, LinkCipherError> {
        let blob = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| LinkCipherError::InvalidOrTampered)?;

        if blob.len() < NONCE_LENGTH + TAG_LENGTH {
            return Err(LinkCipherError::InvalidOrTampered);
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_LENGTH);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| LinkCipherError::InvalidOrTampered)?;

        serde_json::from_slice(&plaintext).map_err(|_| LinkCipherError::InvalidOrTampered)
    }
}
