// src/generators/password.rs
use crate::error::{EngineError, Result};
use crate::generators::charset::CharacterPool;
use crate::generators::sampler::{EntropySource, SecureSampler};

/// Upper bound on batch size, mirrored by the request validator.
pub const MAX_BATCH_SIZE: usize = 20;

/// Generate a single password from a pre-built pool.
///
/// With `require_all_categories` set, one uniformly sampled member of each
/// category present in the pool is placed first (in priority order when the
/// requested length cannot cover every category), the remaining positions
/// are filled from the whole pool, and the buffer is then run through an
/// unbiased Fisher-Yates shuffle so the guaranteed characters end up at
/// unpredictable positions.
pub fn generate<S: EntropySource>(
    pool: &CharacterPool,
    length: usize,
    require_all_categories: bool,
    sampler: &mut SecureSampler<S>,
) -> Result<String> {
    if pool.is_empty() {
        return Err(EngineError::InvalidPolicy(
            "character pool is empty".to_string(),
        ));
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);

    if require_all_categories {
        for category in pool.categories().into_iter().take(length) {
            let members = pool.members_of(category);
            chars.push(*sampler.choose(&members)?);
        }
    }

    while chars.len() < length {
        let idx = sampler.uniform_index(pool.len())?;
        chars.push(pool.char_at(idx));
    }

    sampler.shuffle(&mut chars)?;

    Ok(chars.into_iter().collect())
}

/// Generate `count` independent passwords, in request order.
///
/// Every password gets its own entropy draws; nothing is shared between
/// iterations beyond the immutable pool.
pub fn generate_batch<S: EntropySource>(
    pool: &CharacterPool,
    length: usize,
    require_all_categories: bool,
    count: usize,
    sampler: &mut SecureSampler<S>,
) -> Result<Vec<String>> {
    if count == 0 || count > MAX_BATCH_SIZE {
        return Err(EngineError::InvalidPolicy(format!(
            "batch count must be between 1 and {MAX_BATCH_SIZE}"
        )));
    }

    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate(pool, length, require_all_categories, sampler)?);
    }
    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{self, CharCategory, SIMILAR};
    use crate::generators::sampler::SeededEntropy;
    use crate::models::GenerationPolicy;

    fn full_policy() -> GenerationPolicy {
        GenerationPolicy {
            include_symbols: true,
            ..GenerationPolicy::default()
        }
    }

    fn sampler(seed: u64) -> SecureSampler<SeededEntropy> {
        SecureSampler::new(SeededEntropy::new(seed))
    }

    #[test]
    fn password_has_requested_length_and_pool_membership() {
        let pool = charset::build(&full_policy()).unwrap();
        let mut sampler = sampler(1);
        for length in [4, 16, 128] {
            let password = generate(&pool, length, false, &mut sampler).unwrap();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn narrow_policies_stay_inside_their_pool() {
        let policy = GenerationPolicy {
            include_uppercase: false,
            include_lowercase: false,
            include_numbers: true,
            include_symbols: false,
            ..GenerationPolicy::default()
        };
        let pool = charset::build(&policy).unwrap();
        let mut sampler = sampler(13);
        let password = generate(&pool, 32, true, &mut sampler).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn require_all_categories_covers_every_selected_category() {
        let pool = charset::build(&full_policy()).unwrap();
        for seed in 0..50 {
            let mut sampler = sampler(seed);
            let password = generate(&pool, 4, true, &mut sampler).unwrap();
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| charset::SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn short_password_guarantees_categories_in_priority_order() {
        // Four categories but only two positions: upper and lower win.
        let pool = charset::build(&full_policy()).unwrap();
        assert_eq!(pool.categories(), CharCategory::PRIORITY.to_vec());
        for seed in 0..50 {
            let mut sampler = sampler(seed);
            let password = generate(&pool, 2, true, &mut sampler).unwrap();
            assert_eq!(password.chars().count(), 2);
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn exclude_similar_never_leaks_a_confusable() {
        let policy = GenerationPolicy {
            exclude_similar: true,
            include_symbols: true,
            ..GenerationPolicy::default()
        };
        let pool = charset::build(&policy).unwrap();
        let mut sampler = sampler(9);
        for _ in 0..100 {
            let password = generate(&pool, 24, true, &mut sampler).unwrap();
            assert!(password.chars().all(|c| !SIMILAR.contains(c)));
        }
    }

    #[test]
    fn batch_returns_exactly_count_elements() {
        let pool = charset::build(&full_policy()).unwrap();
        let mut sampler = sampler(5);
        let batch = generate_batch(&pool, 16, true, 20, &mut sampler).unwrap();
        assert_eq!(batch.len(), 20);
        for password in &batch {
            assert_eq!(password.chars().count(), 16);
        }
    }

    #[test]
    fn batch_elements_are_independent_draws() {
        // With an 80-character pool and 16 positions, collisions across 20
        // passwords would indicate shared state, not chance.
        let pool = charset::build(&full_policy()).unwrap();
        let mut sampler = sampler(11);
        let batch = generate_batch(&pool, 16, false, 20, &mut sampler).unwrap();
        let mut unique = batch.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), batch.len());
    }

    #[test]
    fn batch_count_out_of_range_is_rejected() {
        let pool = charset::build(&full_policy()).unwrap();
        let mut s = sampler(0);
        assert!(matches!(
            generate_batch(&pool, 16, false, 0, &mut s),
            Err(EngineError::InvalidPolicy(_))
        ));
        assert!(matches!(
            generate_batch(&pool, 16, false, MAX_BATCH_SIZE + 1, &mut s),
            Err(EngineError::InvalidPolicy(_))
        ));
    }
}
