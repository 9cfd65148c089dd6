use rand::Rng;

/// Length of every generated identifier.
pub const ID_LENGTH: usize = 8;

/// Identifiers are single-case so lookups can be case-insensitive.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces candidate identifiers for new links.
///
/// Generators only produce values; uniqueness is enforced by the store.
pub trait Generator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Draws every character uniformly from a fixed alphabet using the
/// thread-local RNG.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
    alphabet: Vec<u8>,
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: ID_LENGTH,
            alphabet: ALPHABET.to_vec(),
        }
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..self.alphabet.len());
                self.alphabet[idx] as char
            })
            .collect()
    }
}
