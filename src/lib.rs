mod broadcast;
mod encoding;
mod error;
mod fermat;
mod keys;
mod modmath;
mod passwords;
mod pow;
mod roots;
mod signing;
mod transaction;

pub use broadcast::{recover_plaintext, recover_plaintext_hex, recover_plaintext_int, Capture};
pub use encoding::{biguint_from_hex, biguint_to_hex, biguint_to_utf8, bytes_to_hex};
pub use error::{Error, Result};
pub use fermat::{factor, FactorPair};
pub use keys::{
    private_key_from_candidates, private_key_from_factors, private_key_from_shared_factor,
    recover_private_key_hex,
};
pub use modmath::{extended_gcd, gcd, mod_inverse};
pub use passwords::{crack_sha256, crack_sha256_common, COMMON_PASSWORDS};
pub use pow::{block_hash, block_hash_meets_difficulty, find_nonce};
pub use roots::{integer_cbrt, integer_sqrt, is_perfect_square};
pub use signing::{
    decrypt, decrypt_hex, sign_transaction, transaction_digest_int, verify_transaction,
};
pub use transaction::Transaction;
