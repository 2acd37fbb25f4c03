use super::dual::Dual;
use super::scalar::Scalar;

/// Exact derivative of `f` at `x`.
///
/// `f` is run once on `x` seeded as a variable; no finite differences are
/// involved.
pub fn differentiate<T, F>(f: F, x: T) -> T
where
    T: Scalar,
    F: Fn(Dual<T>) -> Dual<T>,
{
    f(Dual::variable(x)).derivative
}

/// Returns `(f(x), f'(x))` from a single evaluation.
pub fn evaluate<T, F>(f: F, x: T) -> (T, T)
where
    T: Scalar,
    F: Fn(Dual<T>) -> Dual<T>,
{
    let out = f(Dual::variable(x));
    (out.value, out.derivative)
}

/// Exact second derivative of `f` at `x`, by nesting duals.
///
/// Seeding `Dual(Dual(x, 1), Dual(1, 0))` makes the result
/// `Dual(Dual(f, f'), Dual(f', f''))`.
pub fn second_derivative<T, F>(f: F, x: T) -> T
where
    T: Scalar,
    F: Fn(Dual<Dual<T>>) -> Dual<Dual<T>>,
{
    let seed = Dual::new(Dual::variable(x), Dual::constant(T::one()));
    f(seed).derivative.derivative
}
