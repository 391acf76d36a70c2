//! Symmetric cipher for the session cookie. The login flow seals the
//! bearer token with a shared secret before setting it as a cookie; the
//! token extractor unseals it on every request. AES-256-GCM with the key
//! derived from the secret via SHA-256, random nonce prepended, base64
//! envelope.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use thiserror::Error;

const NONCE_LEN: usize = 12;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("token cifrado malformado")]
    Malformed,
    #[error("falha ao cifrar o token")]
    Encrypt,
    #[error("falha ao descriptografar o token")]
    Decrypt,
}

fn cipher(secret: &str) -> Aes256Gcm {
    let key = Sha256::digest(secret.as_bytes());
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key))
}

pub fn encrypt(secret: &str, value: &str) -> Result<String, CryptoError> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher(secret)
        .encrypt(nonce, value.as_bytes())
        .map_err(|_| CryptoError::Encrypt)?;

    let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);
    Ok(general_purpose::STANDARD.encode(envelope))
}

pub fn decrypt(secret: &str, sealed: &str) -> Result<String, CryptoError> {
    let raw = general_purpose::STANDARD
        .decode(sealed)
        .map_err(|_| CryptoError::Malformed)?;
    if raw.len() <= NONCE_LEN {
        return Err(CryptoError::Malformed);
    }
    let (nonce, ciphertext) = raw.split_at(NONCE_LEN);

    let plain = cipher(secret)
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::Decrypt)?;
    String::from_utf8(plain).map_err(|_| CryptoError::Decrypt)
}
