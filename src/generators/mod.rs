// src/generators/mod.rs
//
// The generation and analysis engine. Pure and synchronous: no HTTP
// concepts, no logging, typed errors only. All randomness flows through
// sampler::SecureSampler over an injectable EntropySource.

pub mod charset;
pub mod passphrase;
pub mod password;
pub mod sampler;
pub mod strength;
pub mod wordlist;
