//! Verification-code generation

use rand::rngs::OsRng;
use rand::Rng;

/// Draw a numeric one-time code of the given length from the OS CSPRNG
///
/// Leading zeros are allowed, so every position is uniform over 0-9.
#[must_use]
pub fn random_numeric_code(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'))
        .collect()
}
