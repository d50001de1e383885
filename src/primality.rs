//! Deterministic primality test by trial division.
//!
//! The target is divided by every odd integer from 3 up to and including its floor square
//! root. This costs O(sqrt(n)) divisions, which is instantaneous for 64-bit values but grows
//! as 2^(p/2) for a Mersenne number 2^p-1: a prime candidate above p = 64 or so will not
//! finish in practice. Composite candidates usually have a small factor and are rejected fast.

use crate::traits::SqrtFloor;
use num_integer::{Integer, Roots};
use num_traits::{CheckedMul, NumRef, RefNum, ToPrimitive};

/// Test whether a u64 integer is a prime number, using native arithmetic.
pub fn is_prime64(target: u64) -> bool {
    // shortcuts
    if target < 2 {
        return false;
    }
    if target & 1 == 0 {
        return target == 2;
    }

    let bound = target.sqrt_floor();
    (3..=bound).step_by(2).all(|d| target % d != 0)
}

/// Test whether an integer of arbitrary precision is a prime number.
///
/// Negative values of signed types are not prime. Targets that fit in a u64 are
/// delegated to [is_prime64()].
pub fn is_prime<T>(target: &T) -> bool
where
    T: Integer + Roots + CheckedMul + NumRef + ToPrimitive + Clone,
    for<'r> &'r T: RefNum<T>,
{
    let two = T::one() + T::one();
    if target < &two {
        return false;
    }
    if let Some(x) = target.to_u64() {
        return is_prime64(x);
    }
    trial_division(target)
}

/// Run trial division with divisors of type T. The target is expected to be at least 2.
fn trial_division<T>(target: &T) -> bool
where
    T: Integer + Roots + CheckedMul + NumRef + Clone,
    for<'r> &'r T: RefNum<T>,
{
    let two = T::one() + T::one();
    if target.is_even() {
        return target == &two;
    }

    let bound = target.sqrt_floor();
    let mut divisor = &two + T::one();
    while divisor <= bound {
        if target.is_multiple_of(&divisor) {
            return false;
        }
        divisor = divisor + &two;
    }
    true
}
