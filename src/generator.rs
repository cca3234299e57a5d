// src/generator.rs
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{PasswordPolicy, PolicyError};

// Character classes, concatenated in this order when building the pool.
// All three are ASCII, so byte indexing below is safe.
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+{}[]|:;<>,.?/~`";

/// Source of uniformly distributed random indices.
///
/// Injected into [`generate`] so the sampling loop stays pure and testable;
/// `bound` must be at least 1.
pub trait RandomSource {
    /// Return a value uniformly distributed over `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Production source, drawing from the thread-local generator.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Deterministic source seeded from a fixed value: the same seed always
/// produces the same draw sequence, which backs `--seed` and the
/// reproducibility tests.
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Pick the random source for a run: seeded when requested, otherwise the
/// thread-local generator.
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::from_seed(seed)),
        None => Box::new(ThreadRandom),
    }
}

/// Assemble the pool of candidate characters for a policy.
///
/// Letters always lead; digits and symbols follow, each only when its flag
/// is set. The order is fixed so that a given draw sequence always maps to
/// the same password.
pub fn character_pool(policy: &PasswordPolicy) -> String {
    let mut pool = String::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());

    pool.push_str(LETTERS);
    if policy.include_digits() {
        pool.push_str(DIGITS);
    }
    if policy.include_symbols() {
        pool.push_str(SYMBOLS);
    }

    pool
}

/// Sample a password of exactly `policy.length()` characters from the
/// policy's pool, drawing each position independently (repeats allowed).
///
/// Errors if the length is zero or the pool has no characters; neither can
/// happen for a policy built through [`PasswordPolicy::new`].
pub fn generate<R>(policy: &PasswordPolicy, random: &mut R) -> Result<String, PolicyError>
where
    R: RandomSource + ?Sized,
{
    if policy.length() == 0 {
        return Err(PolicyError::LengthOutOfRange(0));
    }

    let pool = character_pool(policy);
    if pool.is_empty() {
        return Err(PolicyError::EmptyPool);
    }

    let chars = pool.as_bytes();
    let mut password = String::with_capacity(policy.length());
    for _ in 0..policy.length() {
        let idx = random.next_index(chars.len());
        password.push(char::from(chars[idx]));
    }

    Ok(password)
}
