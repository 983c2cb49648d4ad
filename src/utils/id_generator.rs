use rand::Rng;

/// Alphabet short keys are drawn from (0-9, A-Z, a-z)
pub const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of every generated short key
pub const SHORT_KEY_LENGTH: usize = 8;

/// Samples a short key of `length` characters from [`CHARSET`]
pub fn generate_short_id<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Whether `key` has the shape of a generated short key
pub fn is_short_id(key: &str) -> bool {
    key.len() == SHORT_KEY_LENGTH && key.bytes().all(|b| CHARSET.contains(&b))
}
