// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

// Password generation policy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationPolicy {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: false,
            exclude_similar: false,
        }
    }
}

// Passphrase generation policy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PassphrasePolicy {
    pub word_count: usize,
    pub separator: String,
    pub casing: WordCasing,
    pub include_number: bool,
}

impl Default for PassphrasePolicy {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            casing: WordCasing::None,
            include_number: false,
        }
    }
}

/// Casing transform applied to every word of a passphrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WordCasing {
    None,
    Capitalize,
    Upper,
}

/// Discrete strength category for an analyzed password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StrengthScore {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    pub score: StrengthScore,
    /// Raw entropy estimate in bits; pattern penalties lower the score,
    /// not this figure.
    pub entropy_bits: f64,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

// Read-only description of the engine's character categories
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CharacterSets {
    /// Uppercase category members
    pub uppercase: String,
    /// Lowercase category members
    pub lowercase: String,
    /// Digit category members
    pub digits: String,
    /// Symbol category members
    pub symbols: String,
    /// Characters removed by the exclude-similar option
    pub similar: String,
}
