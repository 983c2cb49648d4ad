// src/services/key_generator.rs - Collision-avoiding short key generation
use log::debug;
use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};

use crate::errors::AppError;
use crate::models::Entry;
use crate::repositories::KeyStore;
use crate::utils::id_generator::{generate_short_id, SHORT_KEY_LENGTH};

type Result<T> = std::result::Result<T, AppError>;

/// Upper bound on candidate keys tried before giving up
const DEFAULT_MAX_ATTEMPTS: u32 = 4096;

/// Produces random short keys that are not yet present in a [`KeyStore`].
///
/// The random source is a CSPRNG seeded once when the generator is built and
/// shared by every caller; it is never reseeded per key.
pub struct KeyGenerator {
    rng: Mutex<StdRng>,
    max_attempts: u32,
}

impl KeyGenerator {
    /// Generator seeded from the operating system's entropy source
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator, for tests and reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Draws one candidate key without consulting any store
    pub fn next_key(&self) -> String {
        generate_short_id(&mut *self.rng.lock(), SHORT_KEY_LENGTH)
    }

    /// Returns a key that is absent from `store` at the time of the check.
    ///
    /// The key is not reserved; callers that go on to insert it should use
    /// [`KeyGenerator::generate_for`] instead.
    ///
    /// ### Errors
    /// * `AppError::ExhaustedKeyspace` - If every attempt hit an existing key
    pub async fn generate<S: KeyStore + ?Sized>(&self, store: &S) -> Result<String> {
        for _ in 0..self.max_attempts {
            let key = self.next_key();
            if !store.contains(&key).await {
                return Ok(key);
            }
        }
        Err(AppError::ExhaustedKeyspace(self.max_attempts))
    }

    /// Draws keys until one can be inserted for `url`, then returns the new entry.
    ///
    /// ### Errors
    /// * `AppError::ExhaustedKeyspace` - If every attempt hit an existing key
    pub async fn generate_for<S: KeyStore + ?Sized>(&self, store: &S, url: &str) -> Result<Entry> {
        for attempt in 1..=self.max_attempts {
            let key = self.next_key();
            if let Some(entry) = store.insert_new(&key, url).await {
                if attempt > 1 {
                    debug!("Key '{}' found after {} attempts", key, attempt);
                }
                return Ok(entry);
            }
        }
        Err(AppError::ExhaustedKeyspace(self.max_attempts))
    }
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self::new()
    }
}
