use rand::Rng;
use rand::seq::SliceRandom;
use super::{BinaryOperator, Expr, UnaryOperator, Value};

/// Deepest tree the command line will ask for. Node count grows roughly as
/// 2^depth, so anything past this is never going to finish printing anyway.
pub const MAX_DEPTH: u32 = 64;

pub const LEAF_INT_MIN: i64 = -1000;
pub const LEAF_INT_MAX: i64 = 1000;

/// Builds a random expression no deeper than `max_depth`.
///
/// A countdown `r` is drawn from `0..=max_depth` at every node: zero yields a
/// leaf, one a negation, anything larger a binary operation. Children are
/// generated with `max_depth - 1`, so recursion depth is bounded by the argument.
pub fn generate_expression<R: Rng + ?Sized>(rng: &mut R, max_depth: u32) -> Expr {
    let r = rng.gen_range(0..=max_depth);
    if r == 0 || max_depth == 0 {
        return Expr::leaf(generate_value(rng));
    }
    match r {
        1 => Expr::unary(
            UnaryOperator::Negate,
            generate_expression(rng, max_depth - 1),
        ),
        _ => {
            let operator = *BinaryOperator::ALL
                .choose(rng)
                .unwrap_or(&BinaryOperator::Add);
            let left = generate_expression(rng, max_depth - 1);
            let right = generate_expression(rng, max_depth - 1);
            Expr::binary(operator, left, right)
        }
    }
}

/// Half the time an integer in `LEAF_INT_MIN..=LEAF_INT_MAX`, otherwise a real
/// in `[0, 1)` whose rendering has no exponent.
pub fn generate_value<R: Rng + ?Sized>(rng: &mut R) -> Value {
    if rng.gen_bool(0.5) {
        Value::Int(rng.gen_range(LEAF_INT_MIN..=LEAF_INT_MAX))
    } else {
        Value::Real(generate_plain_real(rng))
    }
}

/// Rejection sampler: redraws until the value renders without `e`. Only
/// magnitudes below 1e-4 are rejected, so the expected number of draws is
/// barely above one, but there is no hard bound.
fn generate_plain_real<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let x: f64 = rng.gen();
        if !Value::Real(x).to_string().contains('e') {
            return x;
        }
    }
}
