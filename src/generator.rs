//! The exponent driven search for even perfect numbers.
//!
//! For every exponent p in `2..=limit` the Mersenne number 2^p-1 is tested with trial
//! division, and each prime yields the perfect number 2^(p-1) * (2^p-1). Since the
//! test is O(2^(p/2)) for prime candidates, a very large limit effectively runs forever;
//! this is accepted and there is no early termination besides reaching the limit.

use crate::config::SearchConfig;
use crate::emit::Emitter;
use crate::error::Result;
use crate::mersenne::{euclid_perfect, mersenne};
use crate::pacing::SleepPacer;
use crate::primality::is_prime;
use crate::traits::Pacer;
use log::{debug, info, trace};
use num_bigint::BigUint;
use std::fmt;
use std::io::Write;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// An even perfect number along with the Mersenne prime it was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfectNumber {
    exponent: u64,
    mersenne: BigUint,
    value: BigUint,
}

impl PerfectNumber {
    /// The exponent p of the Mersenne prime 2^p-1
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.exponent
    }

    #[inline]
    pub fn mersenne_prime(&self) -> &BigUint {
        &self.mersenne
    }

    /// The perfect number 2^(p-1) * (2^p-1)
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }
}

impl fmt::Display for PerfectNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// Lazy sequence of the even perfect numbers whose exponent is at most the limit, in
/// increasing order. The sequence is consumed by iteration; scanning again means
/// creating a new instance, which starts over from p = 2.
#[derive(Debug, Clone)]
pub struct PerfectNumbers {
    exponents: RangeInclusive<u64>,
}

impl PerfectNumbers {
    /// Scan exponents from 2 up to and including `limit`. A limit below 2 yields nothing.
    pub fn new(limit: u64) -> Self {
        Self {
            exponents: 2..=limit,
        }
    }
}

impl Iterator for PerfectNumbers {
    type Item = PerfectNumber;

    fn next(&mut self) -> Option<Self::Item> {
        for p in self.exponents.by_ref() {
            let candidate = mersenne(p);
            if is_prime(&candidate) {
                let value = euclid_perfect(p, &candidate);
                return Some(PerfectNumber {
                    exponent: p,
                    mersenne: candidate,
                    value,
                });
            }
            trace!("2^{}-1 is composite", p);
        }
        None
    }
}

impl FusedIterator for PerfectNumbers {}

/// Collect every even perfect number with exponent at most `limit`
pub fn perfect_numbers(limit: u64) -> Vec<BigUint> {
    PerfectNumbers::new(limit)
        .map(PerfectNumber::into_value)
        .collect()
}

/// Scan for perfect numbers, writing each one to `out` as soon as it is found and calling
/// the pacer after each write. Returns the number of perfect numbers emitted.
pub fn search<W: Write, P: Pacer>(config: &SearchConfig, out: W, mut pacer: P) -> Result<usize> {
    debug!("search configuration: {:?}", config);
    info!("scanning exponents 2..={} for Mersenne primes", config.limit());

    let mut emitter = Emitter::new(out, config.format());
    let mut found = 0;
    for perfect in PerfectNumbers::new(config.limit()) {
        info!(
            "2^{}-1 is prime, perfect number #{} has {} bits",
            perfect.exponent(),
            found + 1,
            perfect.value().bits()
        );
        emitter.emit(&perfect)?;
        found += 1;
        pacer.pause();
    }

    info!("found {} perfect numbers up to exponent {}", found, config.limit());
    Ok(found)
}

/// Run a search paced by sleeping for the configured interval
pub fn run<W: Write>(config: &SearchConfig, out: W) -> Result<usize> {
    let pacer = SleepPacer::new(config.pace());
    debug!("pausing {:?} after each perfect number", pacer.interval());
    search(config, out, pacer)
}
