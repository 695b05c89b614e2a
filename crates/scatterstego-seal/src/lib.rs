//! # Image Sealing
//! Whole-file encryption for stego images. The key is the SHA-256 digest of the password,
//! the cipher is XChaCha20Poly1305 and the random nonce is handed back to the caller,
//! who stores it next to the ciphertext.

use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{KeyInit, XChaCha20Poly1305, XNonce};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

pub mod error;

pub use crate::error::SealError;

pub const NONCE_LEN: usize = 24;
pub const KEY_LEN: usize = 32;

pub type Result<T> = std::result::Result<T, SealError>;
pub type Key = [u8; KEY_LEN];
pub type Nonce = [u8; NONCE_LEN];

/// derive the 32 byte key from a password, it is the SHA-256 digest of the UTF-8 bytes.
/// The key is wiped from memory when dropped.
pub fn derive_key(password: &str) -> Zeroizing<Key> {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    key.copy_from_slice(&hasher.finalize());
    key
}

/// encrypt data with a key, returns the cipher data and the nonce that was used
pub fn encrypt(key: &Key, data: &[u8]) -> Result<(Vec<u8>, Nonce)> {
    let generated = XChaCha20Poly1305::generate_nonce(&mut OsRng);
    let encryptor = XChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(key));
    let cipher_data = encryptor
        .encrypt(&generated, data)
        .map_err(SealError::EncryptionError)?;

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&generated);

    Ok((cipher_data, nonce))
}

/// decrypt data that was produced by [`encrypt`] with the same key and nonce
pub fn decrypt(key: &Key, data: &[u8], nonce: &Nonce) -> Result<Vec<u8>> {
    let decryptor = XChaCha20Poly1305::new(chacha20poly1305::Key::from_slice(key));

    decryptor
        .decrypt(XNonce::from_slice(nonce), data)
        .map_err(SealError::DecryptionError)
}

/// turn the raw content of a nonce file back into a [`Nonce`]
pub fn nonce_from_slice(raw: &[u8]) -> Result<Nonce> {
    if raw.len() != NONCE_LEN {
        return Err(SealError::InvalidNonceLength(raw.len()));
    }
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(raw);

    Ok(nonce)
}
