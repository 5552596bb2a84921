// Hastad's broadcast attack against e=3 RSA. The same plaintext encrypted
// under three pairwise-coprime moduli lets the Chinese Remainder Theorem
// reconstruct m^3 over the modulus product; if m^3 is below that product the
// reconstruction is exact and a plain integer cube root recovers m, no
// private key involved.

use num_bigint::BigUint;
use num_traits::One;

use crate::encoding::{biguint_from_hex, biguint_to_utf8};
use crate::error::{Error, Result};
use crate::modmath::{gcd, mod_inverse};
use crate::roots::integer_cbrt;

/// One intercepted transmission: a public modulus and the ciphertext
/// `m^3 mod n` produced under it.
#[derive(Debug, Clone)]
pub struct Capture {
    pub n: BigUint,
    pub c: BigUint,
}

/// Recovers the shared plaintext integer from three e=3 captures.
///
/// Each ciphertext is `c_i = m^3 mod n_i`. With `N = n_1*n_2*n_3` and
/// `N_i = N / n_i`, CRT gives
///
///   m^3 = SUM_i(c_i * N_i * (N_i^-1 mod n_i)) mod N
///
/// The recombined value must cube-root exactly; if it does not, the
/// precondition `m^3 < N` was violated and the result would be garbage, so
/// that case is [`Error::ReconstructionFailed`] instead of a wrong answer.
pub fn recover_plaintext_int(captures: &[Capture; 3]) -> Result<BigUint> {
    for (i, a) in captures.iter().enumerate() {
        for b in &captures[i + 1..] {
            if !gcd(&a.n, &b.n).is_one() {
                return Err(Error::PreconditionViolation(
                    "broadcast moduli must be pairwise coprime".into(),
                ));
            }
        }
    }

    let big_n = captures
        .iter()
        .fold(BigUint::one(), |acc, capture| acc * &capture.n);

    let mut cube = BigUint::from(0u64);
    for capture in captures {
        let n_i = &big_n / &capture.n;
        let y_i = mod_inverse(&n_i, &capture.n)?;
        cube += &capture.c * &n_i * &y_i;
    }
    cube %= &big_n;

    let m = integer_cbrt(&cube);
    if &m * &m * &m != cube {
        return Err(Error::ReconstructionFailed);
    }
    Ok(m)
}

/// Recovers the plaintext and decodes it as big-endian UTF-8 text.
pub fn recover_plaintext(captures: &[Capture; 3]) -> Result<String> {
    let m = recover_plaintext_int(captures)?;
    biguint_to_utf8(&m)
}

/// Hex frontend: moduli and ciphertexts as hex strings, plaintext out as
/// text.
pub fn recover_plaintext_hex(
    n1: &str,
    c1: &str,
    n2: &str,
    c2: &str,
    n3: &str,
    c3: &str,
) -> Result<String> {
    let captures = [
        Capture {
            n: biguint_from_hex(n1)?,
            c: biguint_from_hex(c1)?,
        },
        Capture {
            n: biguint_from_hex(n2)?,
            c: biguint_from_hex(c2)?,
        },
        Capture {
            n: biguint_from_hex(n3)?,
            c: biguint_from_hex(c3)?,
        },
    ];
    recover_plaintext(&captures)
}
