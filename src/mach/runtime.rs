use super::{Compiler, Formula};
use crate::error;
use crate::lang::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

type Result<T> = std::result::Result<T, Error>;

/// ## Stateful formula handle
///
/// Holds at most one compiled formula, the error of the last failed
/// `define`, and the NaN flag of the last evaluation. Evaluating before
/// a successful `define` is an `UncompiledFunction` error.
///
/// ```
/// use formula::mach::Runtime;
/// let mut runtime = Runtime::with_variables(&["x"]);
/// assert!(runtime.eval1(1.0).is_err());
/// runtime.define("sqrt(x)").unwrap();
/// assert_eq!(runtime.eval1(16.0).unwrap(), 4.0);
/// assert_eq!(runtime.eval1(-1.0).unwrap(), 0.0);
/// assert!(runtime.was_nan());
/// ```

pub struct Runtime {
    compiler: Compiler,
    formula: Option<Formula>,
    error: Option<Error>,
    was_nan: bool,
    rng: StdRng,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(Compiler::default())
    }
}

impl Runtime {
    pub fn new(compiler: Compiler) -> Runtime {
        Runtime {
            compiler,
            formula: None,
            error: None,
            was_nan: false,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_variables<S: AsRef<str>>(variables: &[S]) -> Runtime {
        Runtime::new(Compiler::new(variables))
    }

    pub fn discovering() -> Runtime {
        Runtime::new(Compiler::discovering())
    }

    /// Make `random` repeatable.
    pub fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn define(&mut self, source: &str) -> Result<()> {
        self.was_nan = false;
        match self.compiler.compile(source) {
            Ok(formula) => {
                self.formula = Some(formula);
                self.error = None;
                Ok(())
            }
            Err(error) => {
                self.formula = None;
                self.error = Some(error.clone());
                Err(error)
            }
        }
    }

    pub fn is_compiled(&self) -> bool {
        self.formula.is_some()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    /// Variables of the compiled formula, including discovered ones.
    pub fn variables(&self) -> &[String] {
        match &self.formula {
            Some(formula) => formula.variables(),
            None => self.compiler.variables(),
        }
    }

    pub fn evaluate(&mut self, values: &[f64]) -> Result<f64> {
        self.was_nan = false;
        let formula = match &self.formula {
            Some(formula) => formula,
            None => return Err(error!(UncompiledFunction)),
        };
        let eval = formula.run(values, &mut self.rng)?;
        self.was_nan = eval.was_nan;
        Ok(eval.value)
    }

    pub fn eval1(&mut self, x: f64) -> Result<f64> {
        self.evaluate(&[x])
    }

    pub fn eval2(&mut self, x: f64, y: f64) -> Result<f64> {
        self.evaluate(&[x, y])
    }

    pub fn eval3(&mut self, x: f64, y: f64, z: f64) -> Result<f64> {
        self.evaluate(&[x, y, z])
    }

    pub fn was_nan(&self) -> bool {
        self.was_nan
    }
}
