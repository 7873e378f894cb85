// src/generators/strength.rs
use crate::error::{EngineError, Result};
use crate::generators::charset;
use crate::models::{StrengthReport, StrengthScore};

// Effective alphabet sizes per detected category. The symbol figure is the
// size of the curated generation set; anything outside ASCII (or otherwise
// unclassified) is charged a flat catch-all space.
const LOWER_SPACE: usize = 26;
const UPPER_SPACE: usize = 26;
const DIGIT_SPACE: usize = 10;
const SYMBOL_SPACE: usize = charset::SYMBOLS.len();
const OTHER_SPACE: usize = 32;

// Fixed deductions, in bits, applied to the adjusted score. The raw
// entropy_bits figure in the report is never reduced.
const SEQUENTIAL_PENALTY_BITS: f64 = 10.0;
const REPEAT_PENALTY_BITS: f64 = 10.0;
const KEYBOARD_PENALTY_BITS: f64 = 10.0;
const SINGLE_CATEGORY_PENALTY_BITS: f64 = 5.0;

// Score bands over adjusted bits. A value exactly equal to a boundary
// resolves to the stronger side.
const FAIR_BITS: f64 = 28.0;
const GOOD_BITS: f64 = 36.0;
const STRONG_BITS: f64 = 60.0;
const VERY_STRONG_BITS: f64 = 128.0;

// Keyboard rows checked for adjacency patterns. The digit row is covered by
// the sequential-run check already.
const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

// Small embedded sample of very common passwords. Membership forces the
// score to weak regardless of the entropy estimate.
const COMMON_PASSWORDS: [&str; 40] = [
    "password", "123456", "123456789", "12345678", "12345", "1234567890",
    "qwerty", "qwerty123", "abc123", "letmein", "monkey", "dragon",
    "iloveyou", "admin", "welcome", "login", "princess", "sunshine",
    "football", "baseball", "master", "shadow", "superman", "batman",
    "trustno1", "starwars", "whatever", "password1", "password123",
    "p@ssw0rd", "111111", "000000", "123123", "654321", "666666",
    "freedom", "secret", "ninja", "mustang", "access",
];

#[derive(Debug, Default)]
struct DetectedClasses {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
    other: bool,
}

impl DetectedClasses {
    fn alphabet_size(&self) -> usize {
        let mut size = 0;
        if self.lower {
            size += LOWER_SPACE;
        }
        if self.upper {
            size += UPPER_SPACE;
        }
        if self.digit {
            size += DIGIT_SPACE;
        }
        if self.symbol {
            size += SYMBOL_SPACE;
        }
        if self.other {
            size += OTHER_SPACE;
        }
        size
    }

    fn count(&self) -> usize {
        [self.lower, self.upper, self.digit, self.symbol, self.other]
            .iter()
            .filter(|&&present| present)
            .count()
    }
}

/// Analyze the strength of an arbitrary password.
///
/// Pure function of the input: detects which character categories the
/// password draws from, estimates `len * log2(alphabet)` bits, deducts
/// fixed penalties for detected weaknesses, and maps the adjusted figure to
/// a discrete score.
pub fn analyze(password: &str) -> Result<StrengthReport> {
    if password.is_empty() {
        return Err(EngineError::InvalidInput(
            "password must not be empty".to_string(),
        ));
    }

    let classes = detect_classes(password);
    let length = password.chars().count();
    let entropy_bits = length as f64 * (classes.alphabet_size() as f64).log2();

    let mut warnings = Vec::new();
    let mut adjusted = entropy_bits;

    if has_sequential_run(password) {
        adjusted -= SEQUENTIAL_PENALTY_BITS;
        warnings.push("Contains sequential characters (e.g. 'abc' or '123')".to_string());
    }
    if has_repeated_run(password) {
        adjusted -= REPEAT_PENALTY_BITS;
        warnings.push("Contains repeated characters (e.g. 'aaa')".to_string());
    }
    if has_keyboard_pattern(password) {
        adjusted -= KEYBOARD_PENALTY_BITS;
        warnings.push("Contains a keyboard pattern (e.g. 'qwer')".to_string());
    }
    if classes.count() == 1 {
        adjusted -= SINGLE_CATEGORY_PENALTY_BITS;
        warnings.push("Uses only one character category".to_string());
    }

    let common = is_common_password(password);
    if common {
        warnings.push("Matches a commonly used password".to_string());
    }

    let mut score = score_for_bits(adjusted.max(0.0));
    if common {
        score = StrengthScore::Weak;
    }

    let suggestions = if score < StrengthScore::Strong {
        build_suggestions(&classes, length, common)
    } else {
        Vec::new()
    };

    Ok(StrengthReport {
        score,
        entropy_bits,
        warnings,
        suggestions,
    })
}

fn detect_classes(password: &str) -> DetectedClasses {
    let mut classes = DetectedClasses::default();
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            classes.lower = true;
        } else if c.is_ascii_uppercase() {
            classes.upper = true;
        } else if c.is_ascii_digit() {
            classes.digit = true;
        } else if c.is_ascii() {
            classes.symbol = true;
        } else {
            classes.other = true;
        }
    }
    classes
}

fn score_for_bits(bits: f64) -> StrengthScore {
    if bits >= VERY_STRONG_BITS {
        StrengthScore::VeryStrong
    } else if bits >= STRONG_BITS {
        StrengthScore::Strong
    } else if bits >= GOOD_BITS {
        StrengthScore::Good
    } else if bits >= FAIR_BITS {
        StrengthScore::Fair
    } else {
        StrengthScore::Weak
    }
}

/// Three or more alphanumeric characters in a straight ascending or
/// descending run, case-insensitive ('abc', 'CBA', '789').
fn has_sequential_run(password: &str) -> bool {
    // Non-ASCII characters break a run rather than aliasing into one.
    let bytes: Vec<u8> = password
        .chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() as u8 } else { 0 })
        .collect();
    bytes.windows(3).any(|w| {
        let alnum = w.iter().all(|b| b.is_ascii_alphanumeric());
        let ascending = w[1] == w[0].wrapping_add(1) && w[2] == w[1].wrapping_add(1);
        let descending = w[1] == w[0].wrapping_sub(1) && w[2] == w[1].wrapping_sub(1);
        alnum && (ascending || descending)
    })
}

/// Three or more identical characters in a row.
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Four or more adjacent keys from one keyboard row, in either direction.
fn has_keyboard_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    for row in KEYBOARD_ROWS {
        let reversed: String = row.chars().rev().collect();
        for run in [row, reversed.as_str()] {
            let keys: Vec<char> = run.chars().collect();
            for window in keys.windows(4) {
                let pattern: String = window.iter().collect();
                if lowered.contains(&pattern) {
                    return true;
                }
            }
        }
    }
    false
}

fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.contains(&lowered.as_str())
}

fn build_suggestions(classes: &DetectedClasses, length: usize, common: bool) -> Vec<String> {
    let mut suggestions = Vec::new();
    if common {
        suggestions.push("Avoid common words and passwords".to_string());
    }
    if length < 12 {
        suggestions.push("Increase password length to at least 12 characters".to_string());
    }
    if !classes.upper {
        suggestions.push("Add uppercase letters for better security".to_string());
    }
    if !classes.lower {
        suggestions.push("Add lowercase letters for better security".to_string());
    }
    if !classes.digit {
        suggestions.push("Add numbers for better security".to_string());
    }
    if !classes.symbol {
        suggestions.push("Add symbols for better security".to_string());
    }
    suggestions
}
