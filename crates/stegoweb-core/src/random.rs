//! Random source for auxiliary key material.
//!
//! Nothing in here takes part in hiding or unveiling, the embedding positions
//! are derived from the key alone.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::StegoError;
use crate::result::Result;

/// Characters used for generated keys, without look-alikes like `0`/`O` or `1`/`l`/`I`.
const KEY_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";

/// Default length of a generated key, ~128 bits of entropy with [`KEY_ALPHABET`].
pub const DEFAULT_KEY_LENGTH: usize = 22;

/// A cryptographically strong random 32-bit value from the operating system.
pub fn random_u32() -> Result<u32> {
    let mut buf = [0u8; 4];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(StegoError::RandomSourceError)?;

    Ok(u32::from_le_bytes(buf))
}

/// Generates a random passphrase of `length` characters.
pub fn generate_key(length: usize) -> Result<String> {
    let alphabet_len = KEY_ALPHABET.len() as u32;
    // draws at or above `limit` would favour the first characters of the alphabet
    let limit = u32::MAX - (u32::MAX % alphabet_len);

    let mut key = String::with_capacity(length);
    while key.len() < length {
        let draw = random_u32()?;
        if draw >= limit {
            continue;
        }
        key.push(KEY_ALPHABET[(draw % alphabet_len) as usize] as char);
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_keys_of_the_requested_length() {
        for length in [0, 1, DEFAULT_KEY_LENGTH, 100] {
            let key = generate_key(length).expect("random source failed");
            assert_eq!(key.len(), length);
            assert!(key.bytes().all(|c| KEY_ALPHABET.contains(&c)));
        }
    }

    #[test]
    fn should_not_generate_the_same_key_twice() {
        let a = generate_key(DEFAULT_KEY_LENGTH).unwrap();
        let b = generate_key(DEFAULT_KEY_LENGTH).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn should_draw_varying_values() {
        let draws: Vec<u32> = (0..8).map(|_| random_u32().unwrap()).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }
}
