use super::{codegen, Formula, MAX_CONSTANTS};
use crate::error;
use crate::lang::{parse, split, Error, Names};

type Result<T> = std::result::Result<T, Error>;

/// ## Compiler settings
///
/// ```
/// use formula::mach::Compiler;
/// let formula = Compiler::new(&["x"]).compile("2*x+1").unwrap();
/// assert_eq!(formula.eval1(3.0).unwrap().value, 7.0);
/// ```
///
/// In discovery mode unknown identifiers become new variables, appended
/// in order of first use. The final table is on the returned `Formula`.
///
/// ```
/// use formula::mach::Compiler;
/// let formula = Compiler::discovering().compile("b*a").unwrap();
/// assert_eq!(formula.variables(), &["b", "a"]);
/// ```

#[derive(Debug, Clone)]
pub struct Compiler {
    variables: Vec<String>,
    discover: bool,
    max_constants: usize,
}

impl Default for Compiler {
    fn default() -> Compiler {
        Compiler {
            variables: vec![],
            discover: false,
            max_constants: MAX_CONSTANTS,
        }
    }
}

impl Compiler {
    pub fn new<S: AsRef<str>>(variables: &[S]) -> Compiler {
        Compiler {
            variables: variables.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Compiler::default()
        }
    }

    pub fn discovering() -> Compiler {
        Compiler::default().discover_variables(true)
    }

    pub fn discover_variables(mut self, discover: bool) -> Compiler {
        self.discover = discover;
        self
    }

    /// Ceiling on the constant pool of each compiled program.
    pub fn max_constants(mut self, max_constants: usize) -> Compiler {
        self.max_constants = max_constants;
        self
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn compile(&self, source: &str) -> Result<Formula> {
        self.compile_segments(source)
            .map_err(|error| error.in_source(source))
    }

    fn compile_segments(&self, source: &str) -> Result<Formula> {
        let mut names = Names::new(self.variables.clone(), self.discover);
        let mut references = vec![];
        let mut main = None;
        for segment in split(source)? {
            let expr = parse(segment.text(), segment.offset(), &mut names)?;
            let program = codegen(&expr, self.max_constants)?;
            match segment.name() {
                Some((_col, name)) => {
                    names.declare_reference(name);
                    references.push((name.clone(), program));
                }
                None => main = Some(program),
            }
        }
        match main {
            Some(program) => Ok(Formula::new(
                source.to_string(),
                names.into_variables(),
                references,
                program,
            )),
            None => Err(error!(CodeDamaged; "NO MAIN EXPRESSION")),
        }
    }
}
