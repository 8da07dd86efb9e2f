//! Password Generation
//!
//! Builds the sampling alphabet from the character-class toggles, draws
//! characters from it and rates the configuration.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 50;

/// Generator settings picked in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordConfig {
    pub length: usize,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_digits: true,
            include_symbols: true,
        }
    }
}

impl PasswordConfig {
    /// Create a config, clamping `length` into the slider range
    pub fn new(length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            include_digits,
            include_symbols,
        }
    }

    pub fn with_length(self, length: usize) -> Self {
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            ..self
        }
    }

    pub fn toggle_digits(self) -> Self {
        Self {
            include_digits: !self.include_digits,
            ..self
        }
    }

    pub fn toggle_symbols(self) -> Self {
        Self {
            include_symbols: !self.include_symbols,
            ..self
        }
    }
}

/// Characters eligible for sampling under `config`
pub fn alphabet(config: &PasswordConfig) -> String {
    let mut chars = String::from(LETTERS);
    if config.include_digits {
        chars.push_str(DIGITS);
    }
    if config.include_symbols {
        chars.push_str(SYMBOLS);
    }
    chars
}

/// Draw `config.length` characters uniformly from the alphabet.
///
/// Not suitable for secrets that need cryptographic strength; the source of
/// randomness is whatever `rng` the caller hands in.
pub fn generate<R: Rng>(config: &PasswordConfig, rng: &mut R) -> String {
    let pool = alphabet(config);
    // Every alphabet character is ASCII, so each byte is one char.
    let bytes = pool.as_bytes();
    (0..config.length)
        .filter_map(|_| bytes.choose(rng))
        .map(|&b| char::from(b))
        .collect()
}

/// `generate` backed by the thread-local generator
pub fn generate_with_thread_rng(config: &PasswordConfig) -> String {
    generate(config, &mut rand::thread_rng())
}

/// Strength bands shown by the meter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 4 => StrengthLevel::VeryStrong,
            3 => StrengthLevel::Strong,
            2 => StrengthLevel::Medium,
            1 => StrengthLevel::Weak,
            _ => StrengthLevel::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "strength-very-weak",
            StrengthLevel::Weak => "strength-weak",
            StrengthLevel::Medium => "strength-medium",
            StrengthLevel::Strong => "strength-strong",
            StrengthLevel::VeryStrong => "strength-very-strong",
        }
    }
}

/// Result of rating a config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub score: u8,
    pub level: StrengthLevel,
}

impl Strength {
    pub const MAX_SCORE: u8 = 5;

    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    /// Meter fill, 0..=100
    pub fn percent(&self) -> u8 {
        (u16::from(self.score) * 100 / u16::from(Self::MAX_SCORE)) as u8
    }
}

/// Rate a config. Depends only on the config, never on a generated value.
pub fn strength(config: &PasswordConfig) -> Strength {
    let mut score = 0u8;
    if config.length >= 8 {
        score += 1;
    }
    if config.length >= 12 {
        score += 1;
    }
    if config.include_digits {
        score += 1;
    }
    if config.include_symbols {
        score += 1;
    }
    if config.length >= 16 && config.include_digits && config.include_symbols {
        score += 1;
    }

    Strength {
        score,
        level: StrengthLevel::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_letters_only() {
        let config = PasswordConfig::new(10, false, false);
        assert_eq!(alphabet(&config), LETTERS);
    }

    #[test]
    fn test_alphabet_all_classes() {
        let config = PasswordConfig::new(10, true, true);
        let chars = alphabet(&config);
        assert_eq!(chars.len(), LETTERS.len() + DIGITS.len() + SYMBOLS.len());
        assert!(chars.ends_with(SYMBOLS));
    }

    #[test]
    fn test_generate_length_and_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [MIN_LENGTH, 12, 33, MAX_LENGTH] {
            for (digits, symbols) in [(false, false), (true, false), (false, true), (true, true)] {
                let config = PasswordConfig::new(length, digits, symbols);
                let pool = alphabet(&config);
                let password = generate(&config, &mut rng);

                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| pool.contains(c)));
                if !digits {
                    assert!(!password.chars().any(|c| c.is_ascii_digit()));
                }
                if !symbols {
                    assert!(!password.chars().any(|c| SYMBOLS.contains(c)));
                }
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_under_seed() {
        let config = PasswordConfig::default();
        let a = generate(&config, &mut StdRng::seed_from_u64(42));
        let b = generate(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        // Not reachable through `new`, but the field is public
        let config = PasswordConfig {
            length: 0,
            include_digits: true,
            include_symbols: true,
        };
        assert_eq!(generate(&config, &mut StdRng::seed_from_u64(1)), "");
    }

    #[test]
    fn test_length_is_clamped() {
        assert_eq!(PasswordConfig::new(2, true, true).length, MIN_LENGTH);
        assert_eq!(PasswordConfig::default().with_length(99).length, MAX_LENGTH);
    }

    #[test]
    fn test_strength_floor_and_ceiling() {
        let weakest = strength(&PasswordConfig::new(6, false, false));
        assert_eq!(weakest.score, 0);
        assert_eq!(weakest.label(), "Very Weak");
        assert_eq!(weakest.percent(), 0);

        let strongest = strength(&PasswordConfig::new(16, true, true));
        assert_eq!(strongest.score, 5);
        assert_eq!(strongest.label(), "Very Strong");
        assert_eq!(strongest.percent(), 100);
    }

    #[test]
    fn test_strength_bands() {
        assert_eq!(strength(&PasswordConfig::new(8, false, false)).label(), "Weak");
        assert_eq!(strength(&PasswordConfig::new(12, false, false)).label(), "Medium");
        assert_eq!(strength(&PasswordConfig::new(12, true, false)).label(), "Strong");
        // Default config: 12 chars with both classes scores 4
        assert_eq!(strength(&PasswordConfig::default()).score, 4);
        assert_eq!(strength(&PasswordConfig::default()).label(), "Very Strong");
        // Long but single class never earns the bonus point
        assert_eq!(strength(&PasswordConfig::new(50, true, false)).score, 3);
    }

    #[test]
    fn test_toggles() {
        let config = PasswordConfig::default().toggle_digits();
        assert!(!config.include_digits);
        assert!(config.include_symbols);
        assert!(!config.toggle_symbols().include_symbols);
    }
}
