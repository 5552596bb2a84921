// Integer root extraction. The broadcast attack needs an exact cube root and
// Fermat's method needs a square root that stays exact at bit widths where
// floating point falls over, so both are done in pure integer arithmetic.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Floor cube root: the unique `r >= 0` with `r^3 <= n < (r+1)^3`.
///
/// Monotonic binary search; exact whenever `n` is a perfect cube, which is
/// what the e=3 broadcast attack relies on.
pub fn integer_cbrt(n: &BigUint) -> BigUint {
    let mut low = BigUint::zero();
    // 2^(ceil(bits/3) + 1) cubed always exceeds n.
    let mut high = BigUint::one() << ((n.bits() / 3 + 2) as usize);

    while low < high {
        let mid: BigUint = (&low + &high + BigUint::one()) >> 1;
        if &mid * &mid * &mid <= *n {
            low = mid;
        } else {
            high = mid - BigUint::one();
        }
    }
    low
}

/// Floor square root via Newton's method.
pub fn integer_sqrt(n: &BigUint) -> BigUint {
    if n < &BigUint::from(2u64) {
        return n.clone();
    }

    let mut x = BigUint::one() << ((n.bits() / 2 + 1) as usize);
    loop {
        let next = (&x + n / &x) >> 1;
        if next >= x {
            return x;
        }
        x = next;
    }
}

/// True when `n` is a perfect square, verified by squaring the candidate
/// root back (`r*r == n`) rather than trusting any rounding.
pub fn is_perfect_square(n: &BigUint) -> bool {
    let root = integer_sqrt(n);
    &root * &root == *n
}
