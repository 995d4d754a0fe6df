use super::Opcode;
use rand::{Rng, RngCore};

/// Built-in functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Ln,
    Log,
    Abs,
    Int,
    Frac,
    Ceil,
    Floor,
    Round,
    Exp,
    Sqr,
    Sqrt,
    Sign,
    Step,
    Random,
}

/// Built-in functions of two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extended {
    Min,
    Max,
    Mod,
    Atan2,
}

impl Function {
    pub const ALL: [Function; 26] = {
        use Function::*;
        [
            Sin, Cos, Tan, Asin, Acos, Atan, Sinh, Cosh, Tanh, Asinh, Acosh, Atanh, Ln, Log, Abs,
            Int, Frac, Ceil, Floor, Round, Exp, Sqr, Sqrt, Sign, Step, Random,
        ]
    };

    pub fn opcode_and_arity(func_name: &str) -> Option<(Opcode, usize)> {
        if let Some(func) = Function::ALL.iter().find(|f| f.name() == func_name) {
            return Some((Opcode::Fn(*func), 1));
        }
        Extended::ALL
            .iter()
            .find(|f| f.name() == func_name)
            .map(|func| (Opcode::Fn2(*func), 2))
    }

    pub fn name(&self) -> &'static str {
        use Function::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Sinh => "sinh",
            Cosh => "cosh",
            Tanh => "tanh",
            Asinh => "asinh",
            Acosh => "acosh",
            Atanh => "atanh",
            Ln => "ln",
            Log => "log",
            Abs => "abs",
            Int => "int",
            Frac => "frac",
            Ceil => "ceil",
            Floor => "floor",
            Round => "round",
            Exp => "exp",
            Sqr => "sqr",
            Sqrt => "sqrt",
            Sign => "sign",
            Step => "step",
            Random => "random",
        }
    }

    pub fn call(self, x: f64, rng: &mut dyn RngCore) -> f64 {
        use Function::*;
        match self {
            Sin => x.sin(),
            Cos => x.cos(),
            Tan => x.tan(),
            Asin => x.asin(),
            Acos => x.acos(),
            Atan => x.atan(),
            Sinh => x.sinh(),
            Cosh => x.cosh(),
            Tanh => x.tanh(),
            Asinh => x.asinh(),
            Acosh => x.acosh(),
            Atanh => x.atanh(),
            Ln => x.ln(),
            Log => x.log10(),
            Abs => x.abs(),
            Int => (x + 0.5).floor(),
            Frac => x.fract(),
            Ceil => x.ceil(),
            Floor => x.floor(),
            Round => (x + 0.5).floor(),
            Exp => x.exp(),
            Sqr => x * x,
            Sqrt => x.sqrt(),
            Sign => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    x
                }
            }
            Step => {
                if x < 0.0 {
                    0.0
                } else {
                    1.0
                }
            }
            Random => rng.gen::<f64>() * x,
        }
    }
}

impl Extended {
    pub const ALL: [Extended; 4] = [Extended::Min, Extended::Max, Extended::Mod, Extended::Atan2];

    pub fn name(&self) -> &'static str {
        use Extended::*;
        match self {
            Min => "min",
            Max => "max",
            Mod => "mod",
            Atan2 => "atan2",
        }
    }

    pub fn call(self, a: f64, b: f64) -> f64 {
        use Extended::*;
        match self {
            Min => a.min(b),
            Max => a.max(b),
            Mod => ieee_remainder(a, b),
            Atan2 => a.atan2(b),
        }
    }
}

/// `x - n*y` where `n` is `x/y` rounded half to even.
/// Built from `%`, which is exact, so large quotients lose nothing.
fn ieee_remainder(x: f64, y: f64) -> f64 {
    if y == 0.0 || x.is_infinite() || x.is_nan() || y.is_nan() {
        return std::f64::NAN;
    }
    if y.is_infinite() {
        return x;
    }
    let y = y.abs();
    // |x| mod 2y tells the parity of the truncated quotient.
    let twice = x.abs() % (2.0 * y);
    let (mut r, odd) = if twice >= y {
        (twice - y, true)
    } else {
        (twice, false)
    };
    if r > y / 2.0 || (r == y / 2.0 && odd) {
        r -= y;
    }
    if x < 0.0 {
        -r
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_lookup() {
        assert_eq!(
            Function::opcode_and_arity("sqrt"),
            Some((Opcode::Fn(Function::Sqrt), 1))
        );
        assert_eq!(
            Function::opcode_and_arity("atan2"),
            Some((Opcode::Fn2(Extended::Atan2), 2))
        );
        assert_eq!(Function::opcode_and_arity("SQRT"), None);
        assert_eq!(Function::opcode_and_arity("x"), None);
    }

    #[test]
    fn test_rounding_family() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Function::Int.call(2.7, &mut rng), 3.0);
        assert_eq!(Function::Int.call(-2.7, &mut rng), -3.0);
        assert_eq!(Function::Int.call(-2.5, &mut rng), -2.0);
        assert_eq!(Function::Round.call(-2.5, &mut rng), -2.0);
        assert_eq!(Function::Round.call(2.5, &mut rng), 3.0);
        assert_eq!(Function::Sign.call(0.0, &mut rng), 0.0);
        assert_eq!(Function::Step.call(0.0, &mut rng), 1.0);
        assert_eq!(Function::Step.call(-0.1, &mut rng), 0.0);
    }

    #[test]
    fn test_remainder() {
        assert_eq!(Extended::Mod.call(7.0, 3.0), 1.0);
        assert_eq!(Extended::Mod.call(8.0, 3.0), -1.0);
        assert_eq!(Extended::Mod.call(5.0, 2.0), 1.0);
        assert_eq!(Extended::Mod.call(7.0, 2.0), -1.0);
        assert_eq!(Extended::Mod.call(-7.0, 3.0), -1.0);
        assert_eq!(Extended::Mod.call(7.0, -3.0), 1.0);
        assert_eq!(Extended::Mod.call(-5.0, 2.0), -1.0);
        assert_eq!(Extended::Mod.call(5.5, 1.0), -0.5);
        assert_eq!(Extended::Mod.call(1.0, std::f64::INFINITY), 1.0);
        assert!(Extended::Mod.call(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_remainder_large_quotient() {
        // 2^53 leaves 2 when divided by 3, which rounds up to -1.
        assert_eq!(Extended::Mod.call(9007199254740992.0, 3.0), -1.0);
        assert_eq!(Extended::Mod.call(1e22, 3.0), 1.0);
        assert_eq!(Extended::Mod.call(-1e22, 3.0), -1.0);
    }

    #[test]
    fn test_random_scales() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let r = Function::Random.call(10.0, &mut rng);
            assert!((0.0..10.0).contains(&r));
        }
    }
}
