// src/generators/passphrase.rs
use crate::error::{EngineError, Result};
use crate::generators::sampler::{EntropySource, SecureSampler};
use crate::models::{PassphrasePolicy, WordCasing};

pub const MIN_WORDS: usize = 2;
pub const MAX_WORDS: usize = 10;
pub const MAX_SEPARATOR_LEN: usize = 5;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Generate a passphrase from the given wordlist.
///
/// Words are sampled independently and uniformly **with replacement**, so a
/// word may repeat across positions and each word contributes a full
/// `log2(wordlist_len)` bits regardless of the others. When
/// `include_number` is set, a single uniformly sampled digit is appended to
/// the end of one uniformly chosen word rather than at a fixed position.
pub fn generate<S: EntropySource>(
    wordlist: &[&str],
    policy: &PassphrasePolicy,
    sampler: &mut SecureSampler<S>,
) -> Result<String> {
    if wordlist.is_empty() {
        return Err(EngineError::InvalidPolicy(
            "wordlist is empty".to_string(),
        ));
    }
    if !(MIN_WORDS..=MAX_WORDS).contains(&policy.word_count) {
        return Err(EngineError::InvalidPolicy(format!(
            "word count must be between {MIN_WORDS} and {MAX_WORDS}"
        )));
    }
    if policy.separator.chars().count() > MAX_SEPARATOR_LEN {
        return Err(EngineError::InvalidPolicy(format!(
            "separator must be at most {MAX_SEPARATOR_LEN} characters"
        )));
    }
    let separator = if policy.separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        policy.separator.as_str()
    };

    let mut words: Vec<String> = Vec::with_capacity(policy.word_count);
    for _ in 0..policy.word_count {
        let word = sampler.choose(wordlist)?;
        words.push(apply_casing(word, policy.casing));
    }

    if policy.include_number {
        let target = sampler.uniform_index(words.len())?;
        let digit = sampler.digit()?;
        words[target].push(digit);
    }

    Ok(words.join(separator))
}

fn apply_casing(word: &str, casing: WordCasing) -> String {
    match casing {
        WordCasing::None => word.to_string(),
        WordCasing::Upper => word.to_uppercase(),
        WordCasing::Capitalize => {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::sampler::SeededEntropy;
    use crate::generators::wordlist;

    fn sampler(seed: u64) -> SecureSampler<SeededEntropy> {
        SecureSampler::new(SeededEntropy::new(seed))
    }

    fn policy(count: usize) -> PassphrasePolicy {
        PassphrasePolicy {
            word_count: count,
            ..PassphrasePolicy::default()
        }
    }

    #[test]
    fn passphrase_joins_wordlist_members_with_separator() {
        let words = wordlist::words();
        let mut sampler = sampler(2);
        let phrase = generate(words, &policy(4), &mut sampler).unwrap();
        let segments: Vec<&str> = phrase.split('-').collect();
        assert_eq!(segments.len(), 4);
        for segment in segments {
            assert!(words.contains(&segment));
        }
    }

    #[test]
    fn custom_separator_is_used() {
        let words = wordlist::words();
        let mut sampler = sampler(3);
        let p = PassphrasePolicy {
            separator: "..".to_string(),
            ..policy(3)
        };
        let phrase = generate(words, &p, &mut sampler).unwrap();
        assert_eq!(phrase.split("..").count(), 3);
    }

    #[test]
    fn empty_separator_falls_back_to_dash() {
        let words = wordlist::words();
        let mut sampler = sampler(4);
        let p = PassphrasePolicy {
            separator: String::new(),
            ..policy(3)
        };
        let phrase = generate(words, &p, &mut sampler).unwrap();
        assert_eq!(phrase.split('-').count(), 3);
    }

    #[test]
    fn oversized_separator_is_rejected() {
        let words = wordlist::words();
        let mut sampler = sampler(0);
        let p = PassphrasePolicy {
            separator: "------".to_string(),
            ..policy(3)
        };
        assert!(matches!(
            generate(words, &p, &mut sampler),
            Err(EngineError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn word_count_bounds_are_enforced() {
        let words = wordlist::words();
        let mut s = sampler(0);
        assert!(generate(words, &policy(1), &mut s).is_err());
        assert!(generate(words, &policy(11), &mut s).is_err());
        assert!(generate(words, &policy(2), &mut s).is_ok());
        assert!(generate(words, &policy(10), &mut s).is_ok());
    }

    #[test]
    fn empty_wordlist_is_rejected() {
        let mut sampler = sampler(0);
        assert!(matches!(
            generate(&[], &policy(4), &mut sampler),
            Err(EngineError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn capitalize_casing_uppercases_each_first_letter() {
        let words = wordlist::words();
        let mut sampler = sampler(6);
        let p = PassphrasePolicy {
            casing: WordCasing::Capitalize,
            ..policy(4)
        };
        let phrase = generate(words, &p, &mut sampler).unwrap();
        for segment in phrase.split('-') {
            assert!(segment.chars().next().unwrap().is_ascii_uppercase());
            assert!(segment.chars().skip(1).all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn upper_casing_uppercases_whole_words() {
        let words = wordlist::words();
        let mut sampler = sampler(7);
        let p = PassphrasePolicy {
            casing: WordCasing::Upper,
            ..policy(3)
        };
        let phrase = generate(words, &p, &mut sampler).unwrap();
        for segment in phrase.split('-') {
            assert!(segment.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn include_number_appends_exactly_one_digit_to_one_word() {
        let words = wordlist::words();
        let mut sampler = sampler(8);
        let p = PassphrasePolicy {
            include_number: true,
            ..policy(4)
        };
        let phrase = generate(words, &p, &mut sampler).unwrap();
        let digits: Vec<char> = phrase.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits.len(), 1);
        let numbered: Vec<&str> = phrase
            .split('-')
            .filter(|s| s.ends_with(|c: char| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbered.len(), 1);
    }
}
