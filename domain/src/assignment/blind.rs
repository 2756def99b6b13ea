//! Blind identifier minting.
//!
//! Evaluators see an opaque token instead of anything that could reveal the
//! source document, the question, or the display order. Tokens are
//! fixed-length alphanumeric strings drawn from the run RNG, so a seeded
//! run reproduces the exact same identifiers. The minter tracks every token
//! it has issued; two evaluators must never receive duplicate tokens
//! system-wide, so a collision aborts the run.

use crate::core::ids::BlindId;
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::collections::HashSet;
use thiserror::Error;

/// Default token length: 62^12 possibilities, collisions only under a
/// defective RNG.
pub const DEFAULT_BLIND_ID_LEN: usize = 12;

/// Invariant violation: the same token was minted twice in one run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlindIdError {
    #[error("duplicate blind identifier minted: {0}")]
    Duplicate(String),
}

/// Mints globally unique, fixed-length opaque tokens.
#[derive(Debug)]
pub struct BlindIdMinter {
    length: usize,
    issued: HashSet<String>,
}

impl BlindIdMinter {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            issued: HashSet::new(),
        }
    }

    /// Number of tokens issued so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Mint the next token from `rng`.
    pub fn mint(&mut self, rng: &mut impl Rng) -> Result<BlindId, BlindIdError> {
        let token: String = rng
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect();

        if !self.issued.insert(token.clone()) {
            return Err(BlindIdError::Duplicate(token));
        }
        Ok(BlindId::from_token(token))
    }
}

impl Default for BlindIdMinter {
    fn default() -> Self {
        Self::new(DEFAULT_BLIND_ID_LEN)
    }
}
