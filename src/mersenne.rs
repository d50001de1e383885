//! Mersenne numbers and the even perfect numbers built from them

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Exponents p of the first Mersenne primes 2^p-1 (OEIS A000043)
pub const KNOWN_MERSENNE_EXPONENTS: [u64; 16] = [
    2, 3, 5, 7, 13, 17, 19, 31, 61, 89, 107, 127, 521, 607, 1279, 2203,
];

/// Return the Mersenne number 2^p-1
pub fn mersenne(p: u64) -> BigUint {
    (BigUint::one() << p) - 1u32
}

/// Return 2^(p-1) * (2^p-1), which is an even perfect number exactly when 2^p-1 is prime
/// (Euclid-Euler theorem). Returns zero for p = 0.
pub fn perfect_number(p: u64) -> BigUint {
    euclid_perfect(p, &mersenne(p))
}

/// Return 2^(p-1) * m for an already computed Mersenne number m = 2^p-1
pub(crate) fn euclid_perfect(p: u64, mersenne: &BigUint) -> BigUint {
    match p.checked_sub(1) {
        Some(shift) => mersenne << shift,
        None => BigUint::zero(),
    }
}
