use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with the extra operations the dual-number engine
/// needs. The arithmetic itself comes from the operator traits, so generic
/// code reads like ordinary float code.
pub trait Scalar:
    Copy
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;

    fn one() -> Self;

    /// Lifts an integer literal into the ring.
    fn from_constant(n: i32) -> Self;

    fn abs(self) -> Self;

    /// `-1`, `0` or `1`. Zero maps to zero (unlike `f64::signum`, which
    /// returns `1.0` for `+0.0`).
    fn signum(self) -> Self;
}

macro_rules! float_scalar_impl {
    ($t:ty) => {
        impl Scalar for $t {
            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn from_constant(n: i32) -> Self {
                n as $t
            }

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn signum(self) -> Self {
                if self == 0.0 {
                    0.0
                } else {
                    <$t>::signum(self)
                }
            }
        }
    };
}

float_scalar_impl!(f32);
float_scalar_impl!(f64);
