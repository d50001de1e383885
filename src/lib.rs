//! Enumerate even perfect numbers by searching for Mersenne primes.
//!
//! For each exponent p from 2 up to a limit, the Mersenne number 2^p-1 is tested with
//! deterministic trial division at arbitrary precision, and every prime yields the perfect
//! number 2^(p-1) * (2^p-1).
//!
//! ```
//! use perfect_numbers::{perfect_numbers, PerfectNumbers};
//!
//! let found: Vec<String> = perfect_numbers(7).iter().map(|n| n.to_string()).collect();
//! assert_eq!(found, ["6", "28", "496", "8128"]);
//!
//! let exponents: Vec<u64> = PerfectNumbers::new(13).map(|n| n.exponent()).collect();
//! assert_eq!(exponents, [2, 3, 5, 7, 13]);
//! ```

mod config;
mod emit;
mod error;
mod generator;
mod integer;
mod mersenne;
mod pacing;
mod primality;
mod traits;

pub use config::{parse_limit, parse_pace, SearchConfig, DEFAULT_LIMIT, DEFAULT_PACE_SECONDS};
pub use emit::{Emitter, OutputFormat};
pub use error::{Error, Result};
pub use generator::{perfect_numbers, run, search, PerfectNumber, PerfectNumbers};
pub use mersenne::{mersenne, perfect_number, KNOWN_MERSENNE_EXPONENTS};
pub use pacing::{NoPace, SleepPacer};
pub use primality::{is_prime, is_prime64};
pub use traits::{Pacer, SqrtFloor};
