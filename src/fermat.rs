// Fermat's factorization method. Writes an odd semiprime as a difference of
// squares, n = t^2 - s^2, which falls out quickly when the two prime factors
// are close together. It is not a general-purpose factorizer: the further
// apart the factors, the longer the walk, hence the mandatory step cap.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::roots::{integer_sqrt, is_perfect_square};

/// Two distinct odd primes whose product is the factored modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorPair {
    pub p: BigUint,
    pub q: BigUint,
}

/// Factors an odd semiprime whose prime factors are close together.
///
/// Walks `t = ceil(sqrt(n)) + k` for `k = 0, 1, 2, ...` until `t^2 - n` is a
/// perfect square `s^2`, then `n = (t + s)(t - s)`. The perfect-square test
/// is done in integer arithmetic; a floating-point sqrt loses exactness past
/// 2^53 and would walk straight over the answer.
///
/// Gives up with [`Error::FactorizationTimeout`] after `max_steps` values of
/// `k`, the caller's guard against moduli that do not satisfy the
/// close-factor precondition.
pub fn factor(n: &BigUint, max_steps: u64) -> Result<FactorPair> {
    let one = BigUint::one();
    if n <= &one {
        return Err(Error::PreconditionViolation(format!(
            "{n} is not a semiprime"
        )));
    }
    if (n % BigUint::from(2u64)).is_zero() {
        return Err(Error::PreconditionViolation(format!(
            "{n} is even; Fermat's method needs an odd modulus"
        )));
    }
    if is_perfect_square(n) {
        return Err(Error::PreconditionViolation(format!(
            "{n} is a perfect square; its factors are not distinct"
        )));
    }

    let mut t = ceil_sqrt(n);
    for _ in 0..max_steps {
        let candidate = &t * &t - n;
        let s = integer_sqrt(&candidate);
        if &s * &s == candidate {
            return Ok(FactorPair {
                p: &t + &s,
                q: &t - &s,
            });
        }
        t += &one;
    }

    Err(Error::FactorizationTimeout(max_steps))
}

fn ceil_sqrt(n: &BigUint) -> BigUint {
    let root = integer_sqrt(n);
    if &root * &root < *n {
        root + BigUint::one()
    } else {
        root
    }
}
