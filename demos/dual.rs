use dualgrad::autodiff::{differentiate, evaluate, second_derivative};
use dualgrad::{Dual, Scalar};

fn poly<S: Scalar>(x: S) -> S {
    x * x + S::from_constant(3) * x + S::from_constant(2)
}

fn kink<S: Scalar>(x: S) -> S {
    (x - S::from_constant(1)).abs() * x
}

fn main() {
    println!("f(x) = x² + 3x + 2");
    for x in [-2.0, 0.0, 5.0] {
        let (value, slope) = evaluate(poly, x);
        println!("  f({x}) = {value}, f'({x}) = {slope}, f''({x}) = {}", second_derivative(poly, x));
    }

    println!("g(x) = |x - 1|·x");
    for x in [-1.0, 0.5, 3.0] {
        println!("  g'({x}) = {}", differentiate(kink, x));
    }

    println!("seeded input: {}", Dual::variable(4.0));
}
