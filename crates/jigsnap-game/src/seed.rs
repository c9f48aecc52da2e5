//! Reproducible shuffle seeds.

use std::{fmt, str::FromStr};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

/// A 256-bit seed that fully determines a shuffle.
///
/// The textual form is 64 lowercase hexadecimal digits.
///
/// # Examples
///
/// ```
/// use jigsnap_game::ShuffleSeed;
///
/// let text = format!("{}2a", "00".repeat(31));
/// let seed: ShuffleSeed = text.parse().expect("valid seed");
/// assert_eq!(seed.as_bytes()[31], 0x2a);
/// assert_eq!(seed.to_string(), text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleSeed([u8; 32]);

impl ShuffleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for ShuffleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`ShuffleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShuffleSeedParseError {
    /// The string does not have exactly 64 characters.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit at position {position}")]
    InvalidDigit {
        /// Zero-based character position.
        position: usize,
    },
}

impl FromStr for ShuffleSeed {
    type Err = ShuffleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ShuffleSeedParseError::InvalidLength { len });
        }

        let mut seed = [0; 32];
        for (position, c) in s.chars().enumerate() {
            let digit = hex_value(c).ok_or(ShuffleSeedParseError::InvalidDigit { position })?;
            seed[position / 2] = (seed[position / 2] << 4) | digit;
        }
        Ok(Self(seed))
    }
}

fn hex_value(c: char) -> Option<u8> {
    c.to_digit(16).and_then(|digit| u8::try_from(digit).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_and_display() {
        let seed: ShuffleSeed = SEED.parse().unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.as_bytes()[31], 0xf1);
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: ShuffleSeed = SEED.to_uppercase().parse().unwrap();
        assert_eq!(seed.to_string(), SEED);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<ShuffleSeed>(),
            Err(ShuffleSeedParseError::InvalidLength { len: 3 })
        );
        let bad = format!("{}zz", &SEED[..62]);
        assert_eq!(
            bad.parse::<ShuffleSeed>(),
            Err(ShuffleSeedParseError::InvalidDigit { position: 62 })
        );
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        // 63 characters, 64 bytes.
        let short = format!("{}é", &SEED[..62]);
        assert_eq!(
            short.parse::<ShuffleSeed>(),
            Err(ShuffleSeedParseError::InvalidLength { len: 63 })
        );
        let accented = format!("{}é", &SEED[..63]);
        assert_eq!(
            accented.parse::<ShuffleSeed>(),
            Err(ShuffleSeedParseError::InvalidDigit { position: 63 })
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(ShuffleSeed::random(), ShuffleSeed::random());
    }
}
