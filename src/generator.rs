// Keyfob — Password Generator
//
// Builds a password by drawing a per-class character count from the policy
// ranges, picking characters uniformly from each pool, and shuffling the
// result so character-class order is unpredictable.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!#$%&()*+";

/// How many characters of each class a generated password contains.
/// The counts are policy, not a security contract; defaults give passwords
/// of 12 to 20 characters.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub letters: RangeInclusive<usize>,
    pub digits: RangeInclusive<usize>,
    pub symbols: RangeInclusive<usize>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            letters: 8..=10,
            digits: 2..=5,
            symbols: 2..=5,
        }
    }
}

impl PasswordPolicy {
    /// A policy with fixed per-class counts.
    pub fn exact(letters: usize, digits: usize, symbols: usize) -> Self {
        Self {
            letters: letters..=letters,
            digits: digits..=digits,
            symbols: symbols..=symbols,
        }
    }
}

/// Generate a random password under the given policy.
pub fn generate(policy: &PasswordPolicy) -> String {
    let mut rng = rand::thread_rng();

    let nr_letters = rng.gen_range(policy.letters.clone());
    let nr_digits = rng.gen_range(policy.digits.clone());
    let nr_symbols = rng.gen_range(policy.symbols.clone());

    let mut password: Vec<char> = Vec::with_capacity(nr_letters + nr_digits + nr_symbols);

    for _ in 0..nr_letters {
        password.push(LETTERS[rng.gen_range(0..LETTERS.len())] as char);
    }
    for _ in 0..nr_digits {
        password.push(DIGITS[rng.gen_range(0..DIGITS.len())] as char);
    }
    for _ in 0..nr_symbols {
        password.push(SYMBOLS[rng.gen_range(0..SYMBOLS.len())] as char);
    }

    password.shuffle(&mut rng);

    password.into_iter().collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
