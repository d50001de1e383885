use num_integer::Roots;

/// Extension on [num_integer::Roots] returning a square root that has been checked against
/// its neighbours, so that `r * r <= self < (r + 1) * (r + 1)` always holds for the result `r`.
///
/// The trial division bound relies on this exactly: an estimate that is one too small misses
/// the last divisor of a square of a prime, one too large only costs an extra division.
pub trait SqrtFloor: Roots {
    /// Return the floor of the square root of a non-negative integer.
    ///
    /// Like [Roots::sqrt], this panics on negative input.
    fn sqrt_floor(&self) -> Self;
}

/// Pacing policy applied after each perfect number has been emitted
pub trait Pacer {
    /// Block the calling thread before the scan continues
    fn pause(&mut self);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    #[inline]
    fn pause(&mut self) {
        (**self).pause()
    }
}
