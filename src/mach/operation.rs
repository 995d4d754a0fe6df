/// Operator semantics shared by the evaluator.
/// Truth values are `1.0` and `0.0`; any non-zero value is true.
pub struct Operation {}

impl Operation {
    pub fn negate(val: f64) -> f64 {
        -val
    }

    pub fn power(lhs: f64, rhs: f64) -> f64 {
        lhs.powf(rhs)
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    /// Division by exactly zero divides by `f64::EPSILON` instead.
    pub fn divide(lhs: f64, rhs: f64) -> f64 {
        if rhs == 0.0 {
            lhs / std::f64::EPSILON
        } else {
            lhs / rhs
        }
    }

    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn equal(lhs: f64, rhs: f64) -> f64 {
        truth(lhs == rhs)
    }

    pub fn not_equal(lhs: f64, rhs: f64) -> f64 {
        truth(lhs != rhs)
    }

    pub fn less(lhs: f64, rhs: f64) -> f64 {
        truth(lhs < rhs)
    }

    pub fn less_equal(lhs: f64, rhs: f64) -> f64 {
        truth(lhs <= rhs)
    }

    pub fn greater(lhs: f64, rhs: f64) -> f64 {
        truth(lhs > rhs)
    }

    pub fn greater_equal(lhs: f64, rhs: f64) -> f64 {
        truth(lhs >= rhs)
    }

    pub fn and(lhs: f64, rhs: f64) -> f64 {
        truth(is_true(lhs) && is_true(rhs))
    }

    pub fn or(lhs: f64, rhs: f64) -> f64 {
        truth(is_true(lhs) || is_true(rhs))
    }
}

pub fn is_true(val: f64) -> bool {
    val != 0.0
}

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}
