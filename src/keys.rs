// Private-exponent recovery: from known factors, from a pair of moduli that
// share a prime (a key-generation flaw), or by Fermat-factoring a single
// close-factor modulus.

use num_bigint::BigUint;
use num_traits::One;

use crate::encoding::{biguint_from_hex, biguint_to_hex};
use crate::error::{Error, Result};
use crate::fermat;
use crate::modmath::{gcd, mod_inverse};

/// Derives the RSA private exponent from the two prime factors of `n`.
///
/// `d = e^-1 mod (p-1)(q-1)`; fails with [`Error::NoInverse`] when `e` is
/// not coprime to the totient.
pub fn private_key_from_factors(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    let totient = (p - &one) * (q - &one);
    mod_inverse(e, &totient)
}

/// Recovers the private exponent for `n1` when `n1` and `n2` share a prime
/// factor.
///
/// `p = gcd(n1, n2)` exposes the shared prime and `q = n1 / p` the other.
/// Coprime moduli leak nothing, so that case is a
/// [`Error::PreconditionViolation`] rather than a silently wrong key.
pub fn private_key_from_shared_factor(
    n1: &BigUint,
    n2: &BigUint,
    e: &BigUint,
) -> Result<BigUint> {
    let p = gcd(n1, n2);
    if p.is_one() {
        return Err(Error::PreconditionViolation(
            "moduli are coprime; they share no factor to exploit".into(),
        ));
    }
    let q = n1 / &p;
    private_key_from_factors(&p, &q, e)
}

/// Scans a candidate list of public moduli for one sharing a factor with `n`
/// and recovers `n`'s private exponent from the first hit.
pub fn private_key_from_candidates(
    n: &BigUint,
    e: &BigUint,
    candidates: &[BigUint],
) -> Result<BigUint> {
    for candidate in candidates {
        if !gcd(n, candidate).is_one() {
            return private_key_from_shared_factor(n, candidate, e);
        }
    }
    Err(Error::PreconditionViolation(
        "no candidate modulus shares a factor with the target".into(),
    ))
}

/// Hex frontend: Fermat-factors a close-factor modulus and returns the
/// recovered private exponent as hex.
pub fn recover_private_key_hex(n_hex: &str, e_hex: &str, max_steps: u64) -> Result<String> {
    let n = biguint_from_hex(n_hex)?;
    let e = biguint_from_hex(e_hex)?;

    let factors = fermat::factor(&n, max_steps)?;
    let d = private_key_from_factors(&factors.p, &factors.q, &e)?;
    Ok(biguint_to_hex(&d))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::encoding::biguint_to_hex;

    #[test]
    fn private_key_from_factors_matches_textbook_example() {
        let (p, q) = (BigUint::from(61u64), BigUint::from(53u64));
        let e = BigUint::from(17u64);

        let d = private_key_from_factors(&p, &q, &e).unwrap();

        assert_eq!(d, BigUint::from(2753u64));
    }

    #[test]
    fn private_key_from_factors_rejects_exponent_dividing_totient() {
        // phi = 60 * 52 is divisible by 3.
        let (p, q) = (BigUint::from(61u64), BigUint::from(53u64));
        let e = BigUint::from(3u64);

        assert_eq!(private_key_from_factors(&p, &q, &e), Err(Error::NoInverse));
    }

    #[test]
    fn shared_factor_recovery_matches_recovery_from_factors() {
        let p = BigUint::from(101u64);
        let (q1, q2) = (BigUint::from(103u64), BigUint::from(107u64));
        let e = BigUint::from(7u64);
        let n1 = &p * &q1;
        let n2 = &p * &q2;

        let d = private_key_from_shared_factor(&n1, &n2, &e).unwrap();

        assert_eq!(d, private_key_from_factors(&p, &q1, &e).unwrap());
    }

    #[test]
    fn shared_factor_recovery_rejects_coprime_moduli() {
        let n1 = BigUint::from(15u64);
        let n2 = BigUint::from(77u64);
        let e = BigUint::from(17u64);

        assert!(matches!(
            private_key_from_shared_factor(&n1, &n2, &e),
            Err(Error::PreconditionViolation(_))
        ));
    }

    #[test]
    fn candidate_scan_finds_the_modulus_sharing_a_factor() {
        let p = BigUint::from(101u64);
        let n = &p * BigUint::from(103u64);
        let e = BigUint::from(7u64);
        let candidates = vec![
            BigUint::from(15u64) * BigUint::from(77u64),
            BigUint::from(107u64) * BigUint::from(109u64),
            &p * BigUint::from(107u64),
        ];

        let d = private_key_from_candidates(&n, &e, &candidates).unwrap();

        let expected = private_key_from_factors(&p, &BigUint::from(103u64), &e).unwrap();
        assert_eq!(d, expected);
    }

    #[test]
    fn candidate_scan_rejects_a_list_with_no_shared_factor() {
        let n = BigUint::from(101u64) * BigUint::from(103u64);
        let e = BigUint::from(17u64);
        let candidates = vec![BigUint::from(107u64) * BigUint::from(109u64)];

        assert!(matches!(
            private_key_from_candidates(&n, &e, &candidates),
            Err(Error::PreconditionViolation(_))
        ));
    }

    #[test]
    fn recover_private_key_hex_round_trips_through_fermat() {
        let (p, q) = (BigUint::from(10_007u64), BigUint::from(10_009u64));
        let n = &p * &q;
        let e = BigUint::from(17u64);

        let d_hex = recover_private_key_hex(&biguint_to_hex(&n), "11", 1_000).unwrap();

        let expected = private_key_from_factors(&p, &q, &e).unwrap();
        assert_eq!(d_hex, biguint_to_hex(&expected));
    }
}
