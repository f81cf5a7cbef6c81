use rand::{rngs::OsRng, CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::CharacterClasses;

/// Default upper bound on the requested password length.
pub const DEFAULT_MAX_LENGTH: i64 = 128;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerationError {
    #[error("password length must be between 1 and {max}, got {requested}")]
    InvalidLength { requested: i64, max: i64 },
    #[error("no character classes selected")]
    NoCharacterClassSelected,
}

/// One password request: how long, and which character classes to draw from.
///
/// The length is kept signed so callers can pass raw parsed input straight
/// through; the generator rejects non-positive and over-maximum values
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: i64,
    pub classes: CharacterClasses,
}

/// Stateless password generator. Both length bounds are enforced here, not
/// at the caller, so the contract holds no matter who invokes it.
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    max_length: i64,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_length(max_length: i64) -> Self {
        Self { max_length }
    }

    pub fn max_length(&self) -> i64 {
        self.max_length
    }

    /// Generates a password using the operating system's cryptographically
    /// secure random source.
    ///
    /// # Arguments
    /// * `request` - The length and enabled character classes.
    ///
    /// # Returns
    /// * A string of exactly `request.length` characters, each drawn
    ///   independently and uniformly (with replacement) from the effective
    ///   charset.
    pub fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        self.generate_with_rng(request, &mut OsRng)
    }

    /// Same contract as [`generate`](Self::generate), with the entropy
    /// source supplied by the caller. The `CryptoRng` bound keeps
    /// non-cryptographic generators out of production paths; tests drive
    /// this with a seeded ChaCha stream.
    pub fn generate_with_rng<R>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<String, GenerationError>
    where
        R: Rng + CryptoRng,
    {
        let charset = request.classes.effective_charset();
        if charset.is_empty() {
            return Err(GenerationError::NoCharacterClassSelected);
        }
        if request.length < 1 || request.length > self.max_length {
            return Err(GenerationError::InvalidLength {
                requested: request.length,
                max: self.max_length,
            });
        }

        let mut password = String::with_capacity(request.length as usize);
        for _ in 0..request.length {
            // gen_range is half-open, so charset.len() itself is never drawn.
            let idx = rng.gen_range(0..charset.len());
            password.push(charset[idx] as char);
        }

        Ok(password)
    }
}
