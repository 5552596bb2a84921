// Textbook RSA signatures over SHA-256 transaction digests, plus raw
// modular decryption. No OAEP/PSS padding: these exist to demonstrate what a
// recovered private exponent buys an attacker, not to be a signing scheme.

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::encoding::{biguint_from_hex, biguint_to_hex};
use crate::error::Result;
use crate::transaction::Transaction;

/// SHA-256 digest of the transaction's canonical string, interpreted as a
/// big-endian integer. Big-endian is fixed here so signatures are
/// reproducible across platforms.
pub fn transaction_digest_int(tx: &Transaction) -> BigUint {
    let digest = Sha256::digest(tx.canonical_string().as_bytes());
    BigUint::from_bytes_be(&digest)
}

/// Signs a transaction with the private exponent: `digest^d mod n`.
pub fn sign_transaction(tx: &Transaction, d: &BigUint, n: &BigUint) -> BigUint {
    transaction_digest_int(tx).modpow(d, n)
}

/// Checks `signature^e mod n` against the transaction digest reduced mod
/// `n`.
pub fn verify_transaction(
    tx: &Transaction,
    signature: &BigUint,
    e: &BigUint,
    n: &BigUint,
) -> bool {
    signature.modpow(e, n) == transaction_digest_int(tx) % n
}

/// Raw RSA decryption: `c^d mod n`.
pub fn decrypt(c: &BigUint, d: &BigUint, n: &BigUint) -> BigUint {
    c.modpow(d, n)
}

/// Hex frontend: decrypts a hex ciphertext under a hex key and returns the
/// plaintext integer as hex.
pub fn decrypt_hex(n_hex: &str, d_hex: &str, c_hex: &str) -> Result<String> {
    let n = biguint_from_hex(n_hex)?;
    let d = biguint_from_hex(d_hex)?;
    let c = biguint_from_hex(c_hex)?;
    Ok(biguint_to_hex(&decrypt(&c, &d, &n)))
}
