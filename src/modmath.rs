// Extended Euclidean algorithm and modular inverses, the arithmetic core
// shared by every attack in the crate.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// Returns `(g, s, t)` such that `g = gcd(a, b)` and `g = a*s + b*t`.
///
/// Iterative rather than recursive so stack depth stays constant no matter
/// how many bits the operands have.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Returns the unique `d` in `[0, m)` with `e*d = 1 (mod m)`, or
/// [`Error::NoInverse`] when `gcd(e, m) != 1`.
pub fn mod_inverse(e: &BigUint, m: &BigUint) -> Result<BigUint> {
    let e_int = BigInt::from_biguint(Sign::Plus, e.clone());
    let m_int = BigInt::from_biguint(Sign::Plus, m.clone());

    let (gcd, bezout_s, _) = extended_gcd(&e_int, &m_int);
    if !gcd.is_one() {
        return Err(Error::NoInverse);
    }

    let mut inverse = bezout_s % &m_int;
    if inverse.sign() == Sign::Minus {
        inverse += &m_int;
    }
    Ok(inverse.magnitude().clone())
}

pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}
