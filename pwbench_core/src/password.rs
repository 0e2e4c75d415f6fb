use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// Alphabet a password is drawn from: ASCII lowercase, uppercase, digits,
/// then the 32 punctuation symbols (94 characters total).
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789\
      !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Draws `length` characters uniformly, with replacement, from [`ALPHABET`]
/// using the OS entropy source. `length == 0` yields an empty string.
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng.unwrap_err();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_94_unique_ascii_symbols() {
        assert_eq!(ALPHABET.len(), 94);

        let mut seen = [false; 128];
        for &b in ALPHABET {
            assert!(b.is_ascii_graphic(), "non-printable symbol {b:#04x}");
            assert!(!seen[b as usize], "duplicate symbol {:?}", b as char);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn generated_length_matches_request() {
        for length in [1usize, 10, 50, 128] {
            assert_eq!(generate_password(length).len(), length, "length={length}");
        }
    }

    #[test]
    fn zero_length_yields_empty_string() {
        assert_eq!(generate_password(0), "");
    }

    #[test]
    fn generated_symbols_come_from_alphabet() {
        let password = generate_password(256);
        for b in password.bytes() {
            assert!(ALPHABET.contains(&b), "unexpected symbol {:?}", b as char);
        }
    }

    #[test]
    fn successive_passwords_differ() {
        // 94^32 outcomes; a collision here means the RNG is broken.
        assert_ne!(generate_password(32), generate_password(32));
    }
}
