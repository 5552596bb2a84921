use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes shared by every attack in the crate. Each operation reports
/// a typed error to its caller rather than returning a plausible-looking
/// wrong value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no modular inverse exists: operands are not coprime")]
    NoInverse,

    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("factor search gave up after {0} steps; factors may not be close enough")]
    FactorizationTimeout(u64),

    #[error("nonce search gave up after {0} iterations")]
    SearchTimeout(u64),

    #[error("CRT reconstruction is not an exact cube; plaintext cube likely exceeds the modulus product")]
    ReconstructionFailed,
}
