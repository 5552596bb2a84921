// Brute-force proof-of-work: find a nonce whose block hash starts with
// exactly two zero hex digits.

use sha2::{Digest, Sha256};

use crate::encoding::bytes_to_hex;
use crate::error::{Error, Result};
use crate::transaction::Transaction;

/// Difficulty rule: the hex digest starts with exactly two `'0'` digits.
/// Three or more leading zeros does not count.
pub fn block_hash_meets_difficulty(hash_hex: &str) -> bool {
    let mut digits = hash_hex.chars();
    matches!(
        (digits.next(), digits.next(), digits.next()),
        (Some('0'), Some('0'), Some(third)) if third != '0'
    )
}

/// Hex SHA-256 of `nonce || transaction || previous block hash`, the block
/// encoding the nonce search commits to.
pub fn block_hash(nonce: u64, tx: &Transaction, prev_block_hash: &str) -> String {
    let block = format!("{nonce}{}{prev_block_hash}", tx.canonical_string());
    bytes_to_hex(&Sha256::digest(block.as_bytes()))
}

/// Searches nonces from zero until the block hash meets the difficulty
/// rule, giving up with [`Error::SearchTimeout`] after `max_iterations`
/// attempts.
pub fn find_nonce(tx: &Transaction, prev_block_hash: &str, max_iterations: u64) -> Result<u64> {
    for nonce in 0..max_iterations {
        if block_hash_meets_difficulty(&block_hash(nonce, tx, prev_block_hash)) {
            return Ok(nonce);
        }
    }
    Err(Error::SearchTimeout(max_iterations))
}
