use std::time::{Duration, Instant};

use crate::crypto::{Argon2Context, CryptoError};

/// Outcome of timing one hash computation.
pub struct HashTiming {
    pub encoded: String,
    pub elapsed: Duration,
}

/// Hashes `password` exactly once and measures the wall-clock duration of
/// the call. The timed region covers hasher construction, salt generation
/// and the hash itself.
pub fn time_single_hash(ctx: &Argon2Context, password: &str) -> Result<HashTiming, CryptoError> {
    let start = Instant::now();
    let encoded = ctx.hash_encoded(password.as_bytes())?;
    let elapsed = start.elapsed();

    Ok(HashTiming { encoded, elapsed })
}

/// Whole milliseconds, rounded to nearest.
pub fn elapsed_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}
