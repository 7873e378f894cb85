// src/generators/wordlist.rs
use lazy_static::lazy_static;

/// Embedded passphrase wordlist: 2048 lowercase words (3-8 letters), one per
/// line. The size is deliberate: 2^11 words puts each sampled word at
/// exactly 11.0 bits of entropy.
static WORDLIST_RAW: &str = include_str!("wordlists/words.txt");

lazy_static! {
    // Parsed once at first use, then shared read-only for the process
    // lifetime. Dedup preserves first occurrence so the order on disk is
    // the order served.
    static ref WORDS: Vec<&'static str> = {
        let mut seen = std::collections::HashSet::new();
        WORDLIST_RAW
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|word| seen.insert(*word))
            .collect()
    };
}

pub fn words() -> &'static [&'static str] {
    &WORDS
}

pub fn len() -> usize {
    WORDS.len()
}

/// Entropy contributed by one uniformly sampled word, in bits.
pub fn bits_per_word() -> f64 {
    (WORDS.len() as f64).log2()
}
