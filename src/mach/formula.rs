use super::{Compiler, Evaluation, Program};
use crate::error;
use crate::lang::Error;
use rand::RngCore;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled formula
///
/// The main program, the reference programs in declaration order and
/// the variable table they were compiled against. A `Formula` is
/// immutable and can be shared between threads.

#[derive(Debug, Clone)]
pub struct Formula {
    source: String,
    variables: Vec<String>,
    references: Vec<(String, Program)>,
    program: Program,
}

impl Formula {
    pub(crate) fn new(
        source: String,
        variables: Vec<String>,
        references: Vec<(String, Program)>,
        program: Program,
    ) -> Formula {
        Formula {
            source,
            variables,
            references,
            program,
        }
    }

    pub fn compile<S: AsRef<str>>(source: &str, variables: &[S]) -> Result<Formula> {
        Compiler::new(variables).compile(source)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.references.iter().map(|(name, _)| name.as_str())
    }

    /// A later definition of the same name shadows earlier ones.
    pub fn reference(&self, name: &str) -> Option<&Program> {
        self.references
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, program)| program)
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Evaluate with the thread-local random source.
    pub fn evaluate(&self, values: &[f64]) -> Result<Evaluation> {
        self.run(values, &mut rand::thread_rng())
    }

    /// Evaluate every reference in order, then the main program.
    pub fn run<R: RngCore>(&self, values: &[f64], rng: &mut R) -> Result<Evaluation> {
        if values.len() != self.variables.len() {
            return Err(error!(WrongValueCount));
        }
        let mut cache: Vec<f64> = Vec::with_capacity(self.references.len());
        let mut was_nan = false;
        for (_name, program) in &self.references {
            let eval = program.execute(values, &cache, &mut *rng)?;
            was_nan |= eval.was_nan;
            cache.push(eval.value);
        }
        let eval = self.program.execute(values, &cache, &mut *rng)?;
        if was_nan {
            return Ok(Evaluation {
                value: 0.0,
                was_nan,
            });
        }
        Ok(eval)
    }

    pub fn eval1(&self, x: f64) -> Result<Evaluation> {
        self.evaluate(&[x])
    }

    pub fn eval2(&self, x: f64, y: f64) -> Result<Evaluation> {
        self.evaluate(&[x, y])
    }

    pub fn eval3(&self, x: f64, y: f64, z: f64) -> Result<Evaluation> {
        self.evaluate(&[x, y, z])
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (name, program) in &self.references {
            writeln!(f, "[{}]", name)?;
            write!(f, "{}", program)?;
        }
        if !self.references.is_empty() {
            writeln!(f, "[main]")?;
        }
        write!(f, "{}", self.program)
    }
}
