// Dictionary attack on unsalted SHA-256 password hashes. The corpus is
// injected so callers (and tests) can substitute their own list; a small
// excerpt of a common-password leak is bundled as a default.

use sha2::{Digest, Sha256};

use crate::encoding::bytes_to_hex;

/// Most-used passwords from the RockYou leak, ordered by frequency.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "12345",
    "123456789",
    "password",
    "iloveyou",
    "princess",
    "1234567",
    "rockyou",
    "12345678",
    "abc123",
    "nicole",
    "daniel",
    "babygirl",
    "monkey",
    "lovely",
    "jessica",
    "654321",
    "michael",
    "ashley",
    "qwerty",
    "111111",
    "iloveu",
    "000000",
    "michelle",
    "tigger",
    "sunshine",
    "chocolate",
    "password1",
    "soccer",
    "anthony",
    "friends",
    "butterfly",
    "purple",
    "angel",
    "jordan",
    "liverpool",
    "justin",
    "loveme",
    "123123",
    "football",
    "secret",
    "andrea",
    "carlos",
    "jennifer",
    "joshua",
    "bubbles",
    "1234567890",
    "superman",
];

/// Looks up a hex SHA-256 digest against a password corpus, returning the
/// first candidate that hashes to it.
pub fn crack_sha256<'a>(digest_hex: &str, corpus: &[&'a str]) -> Option<&'a str> {
    corpus
        .iter()
        .find(|candidate| {
            bytes_to_hex(&Sha256::digest(candidate.as_bytes())).eq_ignore_ascii_case(digest_hex)
        })
        .copied()
}

/// [`crack_sha256`] against the bundled corpus.
pub fn crack_sha256_common(digest_hex: &str) -> Option<&'static str> {
    crack_sha256(digest_hex, COMMON_PASSWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha256_hex(password: &str) -> String {
        bytes_to_hex(&Sha256::digest(password.as_bytes()))
    }

    #[test]
    fn crack_finds_a_password_in_an_injected_corpus() {
        let corpus = ["hunter2", "letmein", "correcthorsebatterystaple"];

        let cracked = crack_sha256(&sha256_hex("letmein"), &corpus);

        assert_eq!(cracked, Some("letmein"));
    }

    #[test]
    fn crack_returns_none_for_an_unlisted_password() {
        let corpus = ["hunter2", "letmein"];

        assert_eq!(crack_sha256(&sha256_hex("tr0ub4dor&3"), &corpus), None);
    }

    #[test]
    fn crack_is_case_insensitive_over_the_digest() {
        let corpus = ["letmein"];
        let digest = sha256_hex("letmein").to_uppercase();

        assert_eq!(crack_sha256(&digest, &corpus), Some("letmein"));
    }

    #[test]
    fn bundled_corpus_cracks_a_known_weak_password() {
        // sha256("password"), a fixed vector.
        let digest = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

        assert_eq!(crack_sha256_common(digest), Some("password"));
    }
}
