// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::{
    CharacterSets, GenerationPolicy, PassphrasePolicy, StrengthScore, WordCasing,
};

// Generation requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordRequest {
    /// Password length, 4-128 (default 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default false)
    pub include_symbols: Option<bool>,
    /// Exclude easily confused characters like I, l, 1, O, 0, o (default false)
    pub exclude_similar: Option<bool>,
}

impl GeneratePasswordRequest {
    pub fn to_policy(&self) -> GenerationPolicy {
        let defaults = GenerationPolicy::default();
        GenerationPolicy {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated password (only present on success)
    pub password: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateBatchRequest {
    /// Number of passwords to generate, 1-20 (default 5)
    pub count: Option<usize>,
    /// Password length, 4-128 (default 16)
    pub length: Option<usize>,
    /// Include uppercase letters (default true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default true)
    pub include_lowercase: Option<bool>,
    /// Include digits (default true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default false)
    pub include_symbols: Option<bool>,
    /// Exclude easily confused characters (default false)
    pub exclude_similar: Option<bool>,
}

impl GenerateBatchRequest {
    pub fn to_policy(&self) -> GenerationPolicy {
        let defaults = GenerationPolicy::default();
        GenerationPolicy {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateBatchResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated passwords, in request order
    pub passwords: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Passphrase requests and responses
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePassphraseRequest {
    /// Number of words, 2-10 (default 4)
    pub word_count: Option<usize>,
    /// Separator between words, at most 5 characters (default "-")
    pub separator: Option<String>,
    /// Casing applied to every word: none, capitalize, or upper (default none)
    pub casing: Option<WordCasing>,
    /// Append one random digit to a randomly chosen word (default false)
    pub include_number: Option<bool>,
}

impl GeneratePassphraseRequest {
    pub fn to_policy(&self) -> PassphrasePolicy {
        let defaults = PassphrasePolicy::default();
        PassphrasePolicy {
            word_count: self.word_count.unwrap_or(defaults.word_count),
            separator: self.separator.clone().unwrap_or(defaults.separator),
            casing: self.casing.unwrap_or(defaults.casing),
            include_number: self.include_number.unwrap_or(defaults.include_number),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePassphraseResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated passphrase (only present on success)
    pub passphrase: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Strength analysis
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzePasswordRequest {
    /// Password to analyze, 1-1000 characters
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AnalyzePasswordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Strength category (only present on success)
    pub score: Option<StrengthScore>,
    /// Raw entropy estimate in bits (only present on success)
    pub entropy_bits: Option<f64>,
    /// Detected weaknesses
    pub warnings: Vec<String>,
    /// Improvement suggestions
    pub suggestions: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Introspection and health
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CharacterSetsResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The engine's category definitions
    pub charsets: Option<CharacterSets>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Whether the service is up
    pub success: bool,
    /// Service status string
    pub status: String,
    /// Number of words available to the passphrase generator
    pub wordlist_size: usize,
}
