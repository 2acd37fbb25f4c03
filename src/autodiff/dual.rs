use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::scalar::Scalar;

/// A dual number `value + derivative·ε` with `ε² = 0`.
///
/// `derivative` is d(value)/dx for whichever input was seeded with
/// [`Dual::variable`]. Values are never mutated; every operation returns a
/// new `Dual`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<T> {
    pub value: T,
    pub derivative: T,
}

impl<T: Scalar> Dual<T> {
    pub fn new(value: T, derivative: T) -> Self {
        Dual { value, derivative }
    }

    /// Seeds a constant: derivative 0.
    pub fn constant(value: T) -> Self {
        Dual::new(value, T::zero())
    }

    /// Seeds the input variable: derivative 1.
    pub fn variable(value: T) -> Self {
        Dual::new(value, T::one())
    }
}

impl<T: Scalar> Add for Dual<T> {
    type Output = Dual<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Dual::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl<T: Scalar> Sub for Dual<T> {
    type Output = Dual<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Dual::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl<T: Scalar> Mul for Dual<T> {
    type Output = Dual<T>;

    // Product rule.
    fn mul(self, rhs: Self) -> Self::Output {
        Dual::new(
            self.value * rhs.value,
            self.derivative * rhs.value + self.value * rhs.derivative,
        )
    }
}

impl<T: Scalar> Neg for Dual<T> {
    type Output = Dual<T>;

    fn neg(self) -> Self::Output {
        Dual::new(-self.value, -self.derivative)
    }
}

impl<T: Scalar> Scalar for Dual<T> {
    fn zero() -> Self {
        Dual::constant(T::zero())
    }

    fn one() -> Self {
        Dual::constant(T::one())
    }

    fn from_constant(n: i32) -> Self {
        Dual::constant(T::from_constant(n))
    }

    /// `|u|` with derivative `u'·sign(u)`; the derivative at `u = 0` comes
    /// out as zero.
    fn abs(self) -> Self {
        Dual::new(self.value.abs(), self.derivative * self.value.signum())
    }

    fn signum(self) -> Self {
        Dual::constant(self.value.signum())
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.value, self.derivative)
    }
}
