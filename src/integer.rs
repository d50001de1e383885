//! Backend implementations for integers

use crate::traits::SqrtFloor;
use num_integer::{Integer, Roots};
use num_traits::{CheckedMul, NumRef, RefNum};

impl<T: Integer + Roots + CheckedMul + NumRef + Clone> SqrtFloor for T
where
    for<'r> &'r T: RefNum<T>,
{
    fn sqrt_floor(&self) -> Self {
        let mut root = Roots::sqrt(self);

        // a square that overflows the integer type is larger than self
        while root.checked_mul(&root).map_or(true, |sq| &sq > self) {
            root = root - T::one();
        }
        loop {
            let next = &root + T::one();
            match next.checked_mul(&next) {
                Some(sq) if &sq <= self => root = next,
                _ => break root,
            }
        }
    }
}
